//! Configuration system for the catalog engine.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod catalog_config;
pub mod defaults;
pub mod image_config;
pub mod pagination_config;
pub mod retry_config;
pub mod storage_config;
pub mod synonym_config;

pub use catalog_config::CatalogConfig;
pub use image_config::ImageProxyConfig;
pub use pagination_config::PaginationConfig;
pub use retry_config::RetryConfig;
pub use storage_config::StorageConfig;
pub use synonym_config::{FamiliesConfig, FamilyConfig, SynonymConfig};
