//! # catalog-storage
//!
//! SQLite implementation of the category and content stores.
//! Serialized writer plus a round-robin read pool, `user_version`
//! migrations, and a compiler from [`catalog_core::Predicate`] to SQL.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;
pub mod retry;
pub mod sql;

pub use engine::StorageEngine;

use catalog_core::errors::StorageError;
use rusqlite::ErrorCode;

/// Classify a rusqlite error into the storage error taxonomy.
///
/// Busy/locked becomes [`StorageError::Busy`] (retryable), corrupt or
/// non-database files become [`StorageError::Corruption`], everything else
/// is a plain [`StorageError::SqliteError`].
pub fn to_storage_err(e: rusqlite::Error) -> StorageError {
    match &e {
        rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => StorageError::Busy {
                attempts: 1,
                message: e.to_string(),
            },
            ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase => StorageError::Corruption {
                details: e.to_string(),
            },
            _ => StorageError::SqliteError {
                message: e.to_string(),
            },
        },
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
