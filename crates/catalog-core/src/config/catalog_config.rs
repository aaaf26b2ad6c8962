//! Top-level catalog configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ImageProxyConfig, PaginationConfig, RetryConfig, StorageConfig, SynonymConfig};
use crate::errors::ConfigError;

pub const ENV_DB_PATH: &str = "CATALOG_DB_PATH";
pub const ENV_READ_POOL_SIZE: &str = "CATALOG_READ_POOL_SIZE";
pub const ENV_BUSY_TIMEOUT_MS: &str = "CATALOG_BUSY_TIMEOUT_MS";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CATALOG_*`)
/// 2. Config file (`catalog.toml`, explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub storage: StorageConfig,
    pub retry: RetryConfig,
    pub pagination: PaginationConfig,
    pub images: ImageProxyConfig,
    pub synonyms: SynonymConfig,
}

impl CatalogConfig {
    /// Load configuration: defaults, then the optional file, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        ::tracing::debug!(
            path = ?path,
            db_path = %config.storage.db_path,
            synonym_groups = config.synonyms.groups.len(),
            "catalog config loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    /// Missing sections and keys take their compiled defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CATALOG_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db_path) = lookup(ENV_DB_PATH) {
            if !db_path.trim().is_empty() {
                self.storage.db_path = db_path;
            }
        }
        if let Some(raw) = lookup(ENV_READ_POOL_SIZE) {
            self.storage.read_pool_size = parse_env(ENV_READ_POOL_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_BUSY_TIMEOUT_MS) {
            self.storage.busy_timeout_ms = parse_env(ENV_BUSY_TIMEOUT_MS, &raw)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 {
            return Err(invalid("retry.max_attempts", "must be at least 1"));
        }
        if self.storage.read_pool_size == 0 {
            return Err(invalid("storage.read_pool_size", "must be at least 1"));
        }
        let pagination = &self.pagination;
        if pagination.max_limit == 0 || pagination.admin_max_limit < pagination.max_limit {
            return Err(invalid(
                "pagination",
                "max_limit must be >= 1 and admin_max_limit >= max_limit",
            ));
        }
        if pagination.default_limit == 0 || pagination.default_limit > pagination.admin_max_limit {
            return Err(invalid(
                "pagination.default_limit",
                "must be between 1 and admin_max_limit",
            ));
        }
        for (i, group) in self.synonyms.groups.iter().enumerate() {
            if group.len() < 2 {
                return Err(invalid(
                    &format!("synonyms.groups[{i}]"),
                    "a synonym group needs at least two tokens",
                ));
            }
            if group.iter().any(|t| t.trim().is_empty()) {
                return Err(invalid(
                    &format!("synonyms.groups[{i}]"),
                    "tokens must be non-empty",
                ));
            }
        }
        if let Some((alias, _)) = self
            .synonyms
            .aliases
            .iter()
            .find(|(_, canonical)| canonical.trim().is_empty())
        {
            return Err(invalid(
                &format!("synonyms.aliases.{alias}"),
                "canonical name must be non-empty",
            ));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: key.to_string(),
        message: format!("not a valid number: {raw:?}"),
    })
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
