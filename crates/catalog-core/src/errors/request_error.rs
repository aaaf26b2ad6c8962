use super::error_code::{self, CatalogErrorCode};

/// Malformed resolution parameters. Raised before any store access.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("missing required parameter: {field}")]
    MissingField { field: &'static str },

    #[error("parameter {field} must be an integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl CatalogErrorCode for RequestError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_PARAMETERS
    }
}
