//! A loaded record set plus ingestion metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shot::ShotRecord;

/// Bookkeeping stamped at ingestion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMeta {
    /// When the dataset was produced.
    pub loaded_at: DateTime<Utc>,
    /// Rows that passed the admission predicate.
    pub admitted: usize,
    /// Rows dropped silently (ghost headers, formula lines, malformed rows).
    pub rejected: usize,
}

/// The full canonical record set for one ingestion.
///
/// A dataset is replaced wholesale on each successful ingestion; a
/// superseding ingestion's result simply replaces any prior one
/// (last-write-wins, no incremental merge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<ShotRecord>,
    pub meta: DatasetMeta,
}
