//! CatalogErrorCode trait for the transport boundary.

/// Structured error codes so the HTTP collaborator can map failures to
/// status codes without matching on message text.
pub trait CatalogErrorCode {
    /// Returns the stable error code string (e.g., "INVALID_PARAMETERS").
    fn error_code(&self) -> &'static str;

    /// Whether the caller may retry the same request later.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the transport boundary.
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_TEMPORARILY_UNAVAILABLE";
pub const DATABASE_CORRUPTION: &str = "DATABASE_CORRUPTION";
pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const INVALID_PARAMETERS: &str = "INVALID_PARAMETERS";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const NORMALIZE_ERROR: &str = "NORMALIZE_ERROR";
