//! Error handling for the catalog engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod normalize_error;
pub mod request_error;
pub mod resolve_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::CatalogErrorCode;
pub use normalize_error::NormalizeError;
pub use request_error::RequestError;
pub use resolve_error::{ResolveError, ResolveResult};
pub use storage_error::StorageError;
