use super::error_code::{self, CatalogErrorCode};

/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    /// The database stayed busy/locked for the whole retry budget.
    #[error("database busy after {attempts} attempt(s): {message}")]
    Busy { attempts: u32, message: String },

    #[error("database corruption detected: {details}")]
    Corruption { details: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },
}

impl StorageError {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }
}

impl CatalogErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::DATABASE_ERROR,
            Self::Busy { .. } => error_code::SERVICE_UNAVAILABLE,
            Self::Corruption { .. } => error_code::DATABASE_CORRUPTION,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
        }
    }

    fn is_retryable(&self) -> bool {
        self.is_busy()
    }
}
