//! JSON API surface for host integration.

pub mod json_api;

pub use json_api::{
    analyze_shots_json, ingest_rows_json, AnalyzeRequest, AnalyzeResponse, SCHEMA_VERSION,
};
