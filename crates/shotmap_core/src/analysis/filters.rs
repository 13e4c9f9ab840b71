//! Coordinated facet filtering.
//!
//! Each facet's option list is computed against the *other two* facet
//! selections (plus the penalty predicate), never against its own. This keeps
//! a facet's current choice visible and selectable in its own list even when
//! the other active facets would otherwise filter it out.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{FilterSelection, PenaltyMode, ShotRecord};

/// One selectable match, labelled `"{round} - {home} x {away}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOption {
    pub id: String,
    pub label: String,
}

/// Valid options per facet under the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetOptions {
    pub teams: Vec<String>,
    pub players: Vec<String>,
    pub matches: Vec<MatchOption>,
}

/// Whether the penalty mode admits this record.
pub fn penalty_allows(mode: PenaltyMode, record: &ShotRecord) -> bool {
    match mode {
        PenaltyMode::All => true,
        PenaltyMode::None => !record.is_penalty(),
        PenaltyMode::Only => record.is_penalty(),
    }
}

/// The base-set predicate: facet equality (when selected), penalty mode, and
/// the inclusive minute window.
pub fn in_base_set(record: &ShotRecord, sel: &FilterSelection) -> bool {
    if !sel.team.is_empty() && record.team != sel.team {
        return false;
    }
    if !sel.player.is_empty() && record.player_name != sel.player {
        return false;
    }
    if !sel.match_id.is_empty() && record.match_id != sel.match_id {
        return false;
    }
    if !penalty_allows(sel.penalty_mode, record) {
        return false;
    }
    record.minute >= sel.time_range[0] && record.minute <= sel.time_range[1]
}

/// The current-set predicate: base set plus the record's category toggle.
pub fn in_current_set(record: &ShotRecord, sel: &FilterSelection) -> bool {
    in_base_set(record, sel) && sel.categories.enabled(record.category())
}

/// The currently filtered subset, in record order.
pub fn filtered_records<'a>(records: &'a [ShotRecord], sel: &FilterSelection) -> Vec<&'a ShotRecord> {
    records.iter().filter(|r| in_current_set(r, sel)).collect()
}

/// Compute the valid option set for every facet.
///
/// Linear in record count per facet. Team and player lists sort
/// lexicographically ascending; the match list deduplicates by match id and
/// sorts by label.
pub fn facet_options(records: &[ShotRecord], sel: &FilterSelection) -> FacetOptions {
    let mut teams = BTreeSet::new();
    let mut players = BTreeSet::new();
    let mut matches = Vec::new();
    let mut seen_matches = HashSet::new();

    for record in records {
        if !penalty_allows(sel.penalty_mode, record) {
            continue;
        }
        let team_ok = sel.team.is_empty() || record.team == sel.team;
        let player_ok = sel.player.is_empty() || record.player_name == sel.player;
        let match_ok = sel.match_id.is_empty() || record.match_id == sel.match_id;

        if player_ok && match_ok && !record.team.is_empty() {
            teams.insert(record.team.clone());
        }
        if team_ok && match_ok && !record.player_name.is_empty() {
            players.insert(record.player_name.clone());
        }
        if team_ok && player_ok && seen_matches.insert(record.match_id.clone()) {
            matches.push(MatchOption {
                id: record.match_id.clone(),
                label: format!(
                    "{} - {} x {}",
                    record.round.as_deref().filter(|r| !r.is_empty()).unwrap_or("?"),
                    record.home_team,
                    record.away_team
                ),
            });
        }
    }

    matches.sort_by(|a, b| a.label.cmp(&b.label));
    FacetOptions {
        teams: teams.into_iter().collect(),
        players: players.into_iter().collect(),
        matches,
    }
}
