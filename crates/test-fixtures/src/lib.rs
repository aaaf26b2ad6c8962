//! Catalog fixtures shared by integration tests and benches.
//!
//! Fixture files live under `fixtures/` in this crate. [`storefront_engine`]
//! gives an in-memory [`StorageEngine`] already seeded with the storefront
//! catalog.

use std::path::PathBuf;

use catalog_core::errors::StorageError;
use catalog_core::models::{Category, ContentItem};
use catalog_storage::queries::categories::insert_category;
use catalog_storage::queries::content::insert_content;
use catalog_storage::StorageEngine;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const STOREFRONT: &str = "catalog/storefront.json";

/// Categories and content rows to seed a store with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogFixture {
    pub categories: Vec<Category>,
    pub content: Vec<ContentItem>,
}

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Insert every category and content row of `fixture`.
pub fn seed(engine: &StorageEngine, fixture: &CatalogFixture) -> Result<(), StorageError> {
    engine.with_writer(|conn| {
        for category in &fixture.categories {
            insert_category(conn, category)?;
        }
        for item in &fixture.content {
            insert_content(conn, item)?;
        }
        Ok(())
    })
}

/// In-memory store seeded with the storefront catalog.
///
/// # Panics
/// Panics if the store can't be opened or seeded.
pub fn storefront_engine() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().expect("open in-memory store");
    seed(&engine, &load_fixture(STOREFRONT)).expect("seed storefront fixture");
    engine
}
