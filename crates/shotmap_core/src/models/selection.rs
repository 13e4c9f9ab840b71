//! Filter selection owned by the caller.
//!
//! All derived entities (option lists, stats, heat zones, timeline bins,
//! insight) are pure functions of `(records, selection)` and are recomputed
//! in full whenever either input changes.

use serde::{Deserialize, Serialize};

/// Tri-state toggle controlling inclusion of penalty-kick shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyMode {
    /// Keep every shot
    #[default]
    All,
    /// Drop penalty shots
    None,
    /// Keep only penalty shots
    Only,
}

/// The bucket a shot routes to, in routing priority order.
///
/// Routing is exhaustive and mutually exclusive: a goal is always `Goal`
/// regardless of its xGOT, any other shot with `xGOT > 0` is `Target`, and
/// everything else is `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotCategory {
    Goal,
    Target,
    Miss,
}

/// Independent per-category visibility toggles (not mutually exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryToggles {
    pub goal: bool,
    pub target: bool,
    pub miss: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self { goal: true, target: true, miss: true }
    }
}

impl CategoryToggles {
    /// Whether the given category is currently enabled.
    pub fn enabled(&self, category: ShotCategory) -> bool {
        match category {
            ShotCategory::Goal => self.goal,
            ShotCategory::Target => self.target,
            ShotCategory::Miss => self.miss,
        }
    }
}

/// The active facet/category/time selection.
///
/// Empty facet strings mean "unrestricted". `time_range` is in match minutes
/// with `start <= end`, both in `[0, 100]`; `100` denotes "90+".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub team: String,
    pub player: String,
    pub match_id: String,
    pub penalty_mode: PenaltyMode,
    pub categories: CategoryToggles,
    pub time_range: [f64; 2],
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            team: String::new(),
            player: String::new(),
            match_id: String::new(),
            penalty_mode: PenaltyMode::All,
            categories: CategoryToggles::default(),
            time_range: [0.0, 100.0],
        }
    }
}
