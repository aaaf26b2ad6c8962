//! StorageEngine: owns the DatabaseManager, implements ICategoryStore +
//! IContentStore, and wraps every read in the busy retry.

use std::path::Path;

use catalog_core::config::{CatalogConfig, RetryConfig, StorageConfig};
use catalog_core::errors::StorageError;
use catalog_core::models::{Category, Column, ContentItem, PageWindow, Predicate};
use catalog_core::traits::{ICategoryStore, IContentStore};
use rusqlite::Connection;

use crate::connection::DatabaseManager;
use crate::queries::{categories, content};
use crate::retry::with_busy_retry;

pub struct StorageEngine {
    db: DatabaseManager,
    retry: RetryConfig,
}

impl StorageEngine {
    /// Open a file-backed engine at `path`.
    pub fn open(
        path: &Path,
        storage: &StorageConfig,
        retry: RetryConfig,
    ) -> Result<Self, StorageError> {
        let engine = Self {
            db: DatabaseManager::open(path, storage)?,
            retry,
        };
        tracing::info!(
            path = %path.display(),
            readers = engine.read_pool_size(),
            "catalog store opened"
        );
        Ok(engine)
    }

    /// Open the engine described by `config.storage.db_path`.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, StorageError> {
        Self::open(
            Path::new(&config.storage.db_path),
            &config.storage,
            config.retry.clone(),
        )
    }

    /// Open an in-memory engine (for testing and fixtures).
    /// Reads go through the writer.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory(&StorageConfig::default())?,
            retry: RetryConfig::default(),
        })
    }

    /// Execute a write with the serialized writer. The engine itself never
    /// writes; this exists for seeding and administrative tooling.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        self.db.with_writer(f)
    }

    /// Run `f` on a read connection: a pooled reader when file-backed,
    /// otherwise the shared connection.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        self.db.with_reader(f)
    }

    pub fn read_pool_size(&self) -> usize {
        self.db.read_pool_size()
    }

    fn read<F, T>(&self, operation: &'static str, f: F) -> Result<T, StorageError>
    where
        F: Fn(&Connection) -> Result<T, StorageError>,
    {
        with_busy_retry(&self.retry, operation, || self.with_reader(&f))
    }
}

impl ICategoryStore for StorageEngine {
    fn find_category(&self, name: &str) -> Result<Option<Category>, StorageError> {
        self.read("find_category", |conn| categories::find_by_name(conn, name))
    }

    fn active_children(&self, parent_id: i64) -> Result<Vec<Category>, StorageError> {
        self.read("active_children", |conn| {
            categories::active_children(conn, parent_id)
        })
    }

    fn top_level_categories(&self) -> Result<Vec<Category>, StorageError> {
        self.read("top_level_categories", categories::active_top_level)
    }
}

impl IContentStore for StorageEngine {
    fn count_content(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        self.read("count_content", |conn| content::count_matching(conn, predicate))
    }

    fn query_content(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> Result<Vec<ContentItem>, StorageError> {
        self.read("query_content", |conn| {
            content::query_matching(conn, predicate, window)
        })
    }

    fn distinct_values(
        &self,
        column: Column,
        predicate: &Predicate,
    ) -> Result<Vec<String>, StorageError> {
        self.read("distinct_values", |conn| {
            content::distinct_values(conn, column, predicate)
        })
    }
}
