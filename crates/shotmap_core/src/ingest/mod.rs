//! # Ingestion Module
//!
//! Converts raw spreadsheet rows (loosely-typed JSON objects with arbitrary
//! key spelling) into canonical [`ShotRecord`]s.
//!
//! Normalization is total: rows that fail the admission predicate are dropped
//! silently, malformed numeric cells degrade to `0`, and goal-mouth parsing
//! degrades through a fallback field pair down to `None`. No input can make
//! ingestion fail.

pub mod columns;
pub mod numeric;
pub mod teams;

pub use columns::{resolve, resolve_string, Column};
pub use numeric::parse_num;
pub use teams::canonical_team_name;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::models::{Dataset, DatasetMeta, GoalMouthPoint, ShotRecord};

/// Normalize raw rows into canonical records, preserving input order.
///
/// A row is admitted only when its player name resolves to more than two
/// characters and its match id resolves to a non-empty string other than
/// `"0"` or `"NaN"` (ghost headers and formula lines fail this).
pub fn normalize_rows(rows: &[Value]) -> Vec<ShotRecord> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let row = row.as_object()?;
            normalize_row(row, index)
        })
        .collect()
}

/// Normalize rows and stamp dataset metadata.
///
/// The returned dataset is meant to replace any previously loaded one
/// wholesale; there is no incremental merge.
pub fn ingest(rows: &[Value]) -> Dataset {
    let records = normalize_rows(rows);
    let admitted = records.len();
    let rejected = rows.len() - admitted;
    if rejected > 0 {
        debug!("dropped {} of {} raw rows during normalization", rejected, rows.len());
    }
    info!("ingested {} shot records", admitted);
    Dataset {
        records,
        meta: DatasetMeta { loaded_at: Utc::now(), admitted, rejected },
    }
}

fn normalize_row(row: &Map<String, Value>, index: usize) -> Option<ShotRecord> {
    let player_name = resolve_string(row, Column::PlayerName).unwrap_or_default();
    let match_id = resolve_string(row, Column::MatchId)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    if player_name.chars().count() <= 2 {
        return None;
    }
    if match_id.is_empty() || match_id == "0" || match_id == "NaN" {
        return None;
    }

    let home_team = resolve_string(row, Column::HomeTeam)
        .filter(|s| !s.is_empty())
        .map(|s| canonical_team_name(&s).to_string())
        .unwrap_or_else(|| teams::HOME_PLACEHOLDER.to_string());
    let away_team = resolve_string(row, Column::AwayTeam)
        .filter(|s| !s.is_empty())
        .map(|s| canonical_team_name(&s).to_string())
        .unwrap_or_else(|| teams::AWAY_PLACEHOLDER.to_string());
    let team = resolve_string(row, Column::Team)
        .filter(|s| !s.is_empty())
        .map(|s| canonical_team_name(&s).to_string())
        .unwrap_or_default();

    Some(ShotRecord {
        id: resolve_string(row, Column::Id).unwrap_or_else(|| index.to_string()),
        match_id,
        round: resolve_string(row, Column::Round).map(format_round),
        home_team,
        away_team,
        team,
        player_name,
        x: parse_num(resolve(row, Column::X)),
        y: parse_num(resolve(row, Column::Y)),
        minute: parse_num(resolve(row, Column::Minute)),
        xg: parse_num(resolve(row, Column::Xg)),
        xgot: parse_num(resolve(row, Column::Xgot)),
        event_type: resolve_string(row, Column::EventType).unwrap_or_default().to_lowercase(),
        situation: resolve_string(row, Column::Situation).unwrap_or_default().to_lowercase(),
        body_part: resolve_string(row, Column::BodyPart).unwrap_or_default(),
        on_goal: resolve_goal_mouth(row),
    })
}

/// Zero-pad numeric round labels below 10 (`3` -> `"03"`, `11` -> `"11"`).
///
/// Only the leading integer prefix counts (`"3.7"` -> `"03"`, `"10a"` ->
/// `"10"`); labels with no such prefix pass through unchanged.
fn format_round(raw: String) -> String {
    let trimmed = raw.trim();
    let sign_len = if trimmed.starts_with('-') || trimmed.starts_with('+') { 1 } else { 0 };
    let digits = trimmed[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return raw;
    }
    match trimmed[..sign_len + digits].parse::<i64>() {
        Ok(n) if (0..10).contains(&n) => format!("0{}", n),
        Ok(n) => n.to_string(),
        Err(_) => raw,
    }
}

/// Two-stage goal-mouth resolution.
///
/// The combined `onGoalShot` field is tried first, tolerating single quotes
/// standing in for double quotes. On any parse failure, the separate aliased
/// X/Y fields are used instead; when those are also absent the point is
/// `None`. This never raises.
fn resolve_goal_mouth(row: &Map<String, Value>) -> Option<GoalMouthPoint> {
    if let Some(raw) = resolve(row, Column::OnGoalShot) {
        if let Some(point) = parse_goal_mouth_value(raw) {
            return Some(point);
        }
    }

    let x = resolve(row, Column::OnGoalX);
    let y = resolve(row, Column::OnGoalY);
    if x.is_none() && y.is_none() {
        return None;
    }
    Some(GoalMouthPoint { x: parse_num(x), y: parse_num(y) })
}

fn parse_goal_mouth_value(raw: &Value) -> Option<GoalMouthPoint> {
    let parsed;
    let object = match raw {
        Value::String(s) => {
            parsed = serde_json::from_str::<Value>(&s.replace('\'', "\"")).ok()?;
            &parsed
        }
        Value::Object(_) => raw,
        _ => return None,
    };
    let map = object.as_object()?;
    Some(GoalMouthPoint { x: parse_num(map.get("x")), y: parse_num(map.get("y")) })
}
