//! Request-level errors surfaced by the resolution engine.

use super::error_code::CatalogErrorCode;
use super::{ConfigError, RequestError, StorageError};

/// Errors that can fail a resolution call.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CatalogErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Request(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_retryable(),
            _ => false,
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
