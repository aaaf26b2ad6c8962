use super::error_code::{self, CatalogErrorCode};

/// Row-local transformation failures. The normalizer recovers from these by
/// emitting an error-marker record; they never fail a request.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("row {id}: legacy content blob is not a JSON object: {reason}")]
    LegacyContent { id: i64, reason: String },

    #[error("row {id}: unreadable created_at {value:?}")]
    InvalidTimestamp { id: i64, value: String },
}

impl CatalogErrorCode for NormalizeError {
    fn error_code(&self) -> &'static str {
        error_code::NORMALIZE_ERROR
    }
}
