//! # Analysis Module
//!
//! Derived views over the canonical record set.
//!
//! - `filters` - coordinated facet option lists and the base/current predicates
//! - `stats` - base/current aggregate statistics
//! - `heatmap` - fixed 10x10 shot-density grid over the attacking half
//! - `timeline` - minute histogram with dynamically chosen bin width
//! - `insight` - qualitative natural-language summary
//!
//! Every derivation is a pure function of `(records, selection)` and is
//! recomputed in full, never incrementally patched.

pub mod filters;
pub mod heatmap;
pub mod insight;
pub mod stats;
pub mod timeline;

pub use filters::{
    facet_options, filtered_records, in_base_set, in_current_set, penalty_allows, FacetOptions,
    MatchOption,
};
pub use heatmap::{build_heat_zones, HeatZone};
pub use insight::generate_insight;
pub use stats::compute_stats;
pub use timeline::{build_timeline, Timeline, TimelineBin};

use serde::{Deserialize, Serialize};

use crate::models::{FilterSelection, ShotRecord, StatsPair, StatsPairDisplay};

/// Everything the presentation layer consumes for one `(records, selection)`
/// pair.
///
/// Heat zones are computed only when requested (a cost optimization, not a
/// correctness requirement); `None` means "heatmap mode off", not "empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub options: FacetOptions,
    pub stats: StatsPair,
    pub stats_display: StatsPairDisplay,
    pub filtered: Vec<ShotRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_zones: Option<Vec<HeatZone>>,
    pub timeline: Timeline,
    pub insight: String,
}

impl DashboardView {
    /// Recompute every derived view from scratch.
    pub fn compute(
        records: &[ShotRecord],
        selection: &FilterSelection,
        include_heatmap: bool,
    ) -> Self {
        let options = facet_options(records, selection);
        let stats = compute_stats(records, selection);
        let filtered = filtered_records(records, selection);
        let heat_zones = include_heatmap.then(|| build_heat_zones(&filtered));
        let timeline = build_timeline(&filtered, selection.time_range);
        let insight = generate_insight(&stats.current, &filtered);

        DashboardView {
            options,
            stats_display: stats.display(),
            stats,
            filtered: filtered.into_iter().cloned().collect(),
            heat_zones,
            timeline,
            insight,
        }
    }
}
