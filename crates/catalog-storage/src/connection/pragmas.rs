//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, configurable page cache, mmap and busy_timeout,
//! foreign_keys ON, temp_store MEMORY.

use catalog_core::config::StorageConfig;
use catalog_core::errors::StorageError;
use rusqlite::Connection;

use crate::to_storage_err;

/// Apply the writer pragmas.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = {cache};
        PRAGMA mmap_size = {mmap};
        PRAGMA busy_timeout = {busy};
        PRAGMA temp_store = MEMORY;
        ",
        cache = config.cache_size,
        mmap = config.mmap_size,
        busy = config.busy_timeout_ms,
    ))
    .map_err(to_storage_err)
}

/// Apply read-only pragmas to a pooled read connection.
pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "
        PRAGMA query_only = ON;
        PRAGMA cache_size = {cache};
        PRAGMA mmap_size = {mmap};
        PRAGMA busy_timeout = {busy};
        PRAGMA temp_store = MEMORY;
        ",
        cache = config.cache_size,
        mmap = config.mmap_size,
        busy = config.busy_timeout_ms,
    ))
    .map_err(to_storage_err)
}

/// Verify that WAL mode is active.
pub fn verify_wal_mode(conn: &Connection) -> Result<bool, StorageError> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(to_storage_err)?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
