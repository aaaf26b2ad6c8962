//! Configuration loading, layering, and validation.

use std::collections::HashMap;
use std::io::Write;

use catalog_core::config::CatalogConfig;
use catalog_core::errors::ConfigError;

#[test]
fn defaults_match_documented_values() {
    let config = CatalogConfig::default();
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.initial_backoff_ms, 1_000);
    assert_eq!(config.pagination.default_limit, 50);
    assert_eq!(config.pagination.max_limit, 100);
    assert_eq!(config.pagination.admin_max_limit, 500);
    assert_eq!(config.images.placeholder, "/api/placeholder/300/300");
    assert_eq!(config.synonyms.legacy_blank_pages, vec!["prime-picks".to_string()]);
    assert_eq!(
        config.synonyms.aliases.get("tech").map(String::as_str),
        Some("Electronics & Gadgets")
    );
    config.validate().unwrap();
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let config = CatalogConfig::from_toml(
        r#"
        [pagination]
        max_limit = 20

        [synonyms]
        groups = [["sofa", "couch"]]
        "#,
    )
    .unwrap();
    assert_eq!(config.pagination.max_limit, 20);
    assert_eq!(config.pagination.default_limit, 50);
    assert_eq!(config.synonyms.groups, vec![vec!["sofa".to_string(), "couch".to_string()]]);
    // Untouched tables inside the section still default.
    assert_eq!(config.synonyms.featured_pages, vec!["top-picks".to_string()]);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = CatalogConfig::from_toml("[retry\nmax_attempts = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_rejects_zero_attempts() {
    let config = CatalogConfig::from_toml("[retry]\nmax_attempts = 0\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "retry.max_attempts")
    );
}

#[test]
fn validation_rejects_singleton_synonym_group() {
    let config = CatalogConfig::from_toml("[synonyms]\ngroups = [[\"tv\"]]\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_win_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[storage]\ndb_path = \"from-file.sqlite\"\nread_pool_size = 2").unwrap();

    let mut config = CatalogConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.storage.db_path, "from-file.sqlite");

    let env: HashMap<&str, &str> = [
        ("CATALOG_DB_PATH", "from-env.sqlite"),
        ("CATALOG_READ_POOL_SIZE", "8"),
    ]
    .into_iter()
    .collect();
    config
        .apply_env_overrides(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();
    assert_eq!(config.storage.db_path, "from-env.sqlite");
    assert_eq!(config.storage.read_pool_size, 8);
}

#[test]
fn non_numeric_env_override_fails() {
    let mut config = CatalogConfig::default();
    let err = config
        .apply_env_overrides(|key| (key == "CATALOG_BUSY_TIMEOUT_MS").then(|| "soon".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
