//! Canonical shot record produced by the normalizer.

use serde::{Deserialize, Serialize};

use super::selection::ShotCategory;
use crate::pitch::goal_frame;

/// Where a shot crossed the goal mouth, in goal-frame units
/// (`x in [0, 2]`, `y in [0, 0.67]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalMouthPoint {
    pub x: f64,
    pub y: f64,
}

impl GoalMouthPoint {
    /// Whether the point lies inside the goal frame (shots wide or over the
    /// bar still carry a crossing point outside it).
    pub fn is_within_frame(&self) -> bool {
        (0.0..=goal_frame::WIDTH).contains(&self.x)
            && (0.0..=goal_frame::HEIGHT).contains(&self.y)
    }
}

/// One normalized shot event. Immutable once produced.
///
/// Every numeric field is a finite number; absent or malformed input
/// normalizes to `0` during ingestion, never to NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Unique within a loaded dataset; defaults to the row's positional index.
    pub id: String,
    /// Non-empty, never `"0"` or `"NaN"` (admission predicate).
    pub match_id: String,
    /// Round label, zero-padded to two digits when numeric and below 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    pub home_team: String,
    pub away_team: String,
    /// Canonicalized team name; empty when the source column is absent.
    pub team: String,
    /// Always longer than 2 characters (admission predicate).
    pub player_name: String,
    /// Shot origin X in attacking-half pitch meters (`[52.5, 105]`).
    pub x: f64,
    /// Shot origin Y in pitch meters (`[0, 68]`).
    pub y: f64,
    /// Match minute; may exceed 90.
    pub minute: f64,
    pub xg: f64,
    pub xgot: f64,
    /// Lower-cased; `"goal"` is the distinguished value.
    pub event_type: String,
    /// Lower-cased; the substring `"penalty"` flags a penalty shot.
    pub situation: String,
    /// Free-form, may be empty.
    pub body_part: String,
    /// Goal-mouth coordinates; both present or the whole point absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_goal: Option<GoalMouthPoint>,
}

impl ShotRecord {
    pub fn is_goal(&self) -> bool {
        self.event_type == "goal"
    }

    pub fn is_penalty(&self) -> bool {
        self.situation.contains("penalty")
    }

    /// Route the shot to its display/statistics bucket.
    pub fn category(&self) -> ShotCategory {
        if self.is_goal() {
            ShotCategory::Goal
        } else if self.xgot > 0.0 {
            ShotCategory::Target
        } else {
            ShotCategory::Miss
        }
    }
}
