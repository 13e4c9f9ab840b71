use thiserror::Error;

/// Errors raised at the ingestion/API boundary.
///
/// The analysis pipeline itself is total: malformed rows are rejected
/// silently and malformed numeric fields degrade to `0`. Errors exist only
/// where a whole payload cannot be decoded at all.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
