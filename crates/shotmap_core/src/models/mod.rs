pub mod dataset;
pub mod selection;
pub mod shot;
pub mod stats;

pub use dataset::{Dataset, DatasetMeta};
pub use selection::{CategoryToggles, FilterSelection, PenaltyMode, ShotCategory};
pub use shot::{GoalMouthPoint, ShotRecord};
pub use stats::{ShotStats, StatsDisplay, StatsPair, StatsPairDisplay};
