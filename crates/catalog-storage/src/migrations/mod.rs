//! Schema migrations using PRAGMA user_version.

pub mod v001_catalog_schema;
pub mod v002_content_indexes;

use catalog_core::errors::StorageError;
use rusqlite::Connection;

use crate::to_storage_err;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current_version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| match to_storage_err(e) {
            StorageError::SqliteError { message } => StorageError::MigrationFailed {
                version: 0,
                message,
            },
            other => other,
        })?;

    let migrations: &[(&str, u32)] = &[
        (v001_catalog_schema::MIGRATION_SQL, 1),
        (v002_content_indexes::MIGRATION_SQL, 2),
    ];

    for (sql, version) in migrations {
        if current_version < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    message: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    message: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(to_storage_err)
}
