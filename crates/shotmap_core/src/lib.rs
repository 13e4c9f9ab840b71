//! # shotmap_core - Shot-Event Normalization and xG Aggregation
//!
//! This library ingests soccer shot-event rows exported from a spreadsheet,
//! normalizes them into a canonical record model, and derives the analytical
//! views a presentation layer consumes: coordinated facet option lists,
//! base/current expected-goals statistics, a spatial shot-density grid, a
//! temporal histogram, and a short qualitative insight.
//!
//! ## Features
//! - Total normalization: malformed rows are dropped silently, malformed
//!   numeric cells degrade to `0`, goal-mouth parsing degrades to `None`
//! - Pure derivations: every view is a function of `(records, selection)`
//!   and is recomputed in full on every change
//! - JSON API for easy integration with host runtimes

pub mod analysis;
pub mod api;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pitch;

// Re-export the main API functions
pub use api::{analyze_shots_json, ingest_rows_json, AnalyzeRequest, AnalyzeResponse};
pub use error::{CoreError, Result};

// Re-export the normalization pipeline
pub use ingest::{ingest, normalize_rows, parse_num};

// Re-export the canonical models
pub use models::{
    CategoryToggles, Dataset, DatasetMeta, FilterSelection, GoalMouthPoint, PenaltyMode,
    ShotCategory, ShotRecord, ShotStats, StatsDisplay, StatsPair, StatsPairDisplay,
};

// Re-export the derived views
pub use analysis::{
    build_heat_zones, build_timeline, compute_stats, facet_options, filtered_records,
    generate_insight, DashboardView, FacetOptions, HeatZone, MatchOption, Timeline, TimelineBin,
};
