//! String-in/string-out JSON entry points.
//!
//! Hosts (the rendering layer, embedding runtimes) talk to the pipeline
//! through JSON payloads: raw rows in, derived views out. Malformed rows
//! inside a well-formed request are rejected silently by the normalizer;
//! only an undecodable request or an unsupported schema version is an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::DashboardView;
use crate::error::{CoreError, Result};
use crate::ingest::ingest;
use crate::models::{DatasetMeta, FilterSelection};

/// Current request/response schema version.
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub schema_version: u8,
    /// Raw spreadsheet rows, arbitrary key spelling.
    pub rows: Vec<Value>,
    #[serde(default)]
    pub selection: FilterSelection,
    #[serde(default)]
    pub include_heatmap: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub schema_version: u8,
    pub meta: DatasetMeta,
    pub view: DashboardView,
}

/// Normalize raw rows and return the full dashboard view as JSON.
pub fn analyze_shots_json(request_json: &str) -> Result<String> {
    let request: AnalyzeRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchemaVersion(request.schema_version));
    }

    debug!("analyze request: {} raw rows", request.rows.len());
    let dataset = ingest(&request.rows);
    let view = DashboardView::compute(&dataset.records, &request.selection, request.include_heatmap);
    info!(
        "analyze complete: {} records, {} in current selection",
        dataset.records.len(),
        view.filtered.len()
    );

    let response = AnalyzeResponse { schema_version: SCHEMA_VERSION, meta: dataset.meta, view };
    Ok(serde_json::to_string(&response)?)
}

/// Normalize raw rows (a bare JSON array) and return the canonical dataset
/// as JSON, for hosts that keep the record set and drive the derivations
/// themselves.
pub fn ingest_rows_json(rows_json: &str) -> Result<String> {
    let rows: Vec<Value> = serde_json::from_str(rows_json)?;
    let dataset = ingest(&rows);
    Ok(serde_json::to_string(&dataset)?)
}
