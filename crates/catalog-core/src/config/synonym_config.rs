//! Synonym, alias, and family tables.
//!
//! Loaded once at startup and never mutated afterwards. The resolver builds
//! its lookup structures from this configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Token synonyms, canonical category aliases, and page special cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymConfig {
    /// Groups of interchangeable tokens. Expansion is symmetric within a group.
    pub groups: Vec<Vec<String>>,
    /// Lowercase alias phrase → canonical category name.
    pub aliases: BTreeMap<String, String>,
    /// Pages that also show rows whose display pages are null or empty.
    pub legacy_blank_pages: Vec<String>,
    /// Pages that fall back to the featured flag when nothing is tagged for them.
    pub featured_pages: Vec<String>,
    pub families: FamiliesConfig,
}

impl Default for SynonymConfig {
    fn default() -> Self {
        Self {
            groups: defaults::DEFAULT_SYNONYM_GROUPS
                .iter()
                .map(|group| owned(group))
                .collect(),
            aliases: defaults::DEFAULT_CATEGORY_ALIASES
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
            legacy_blank_pages: owned(defaults::DEFAULT_LEGACY_BLANK_PAGES),
            featured_pages: owned(defaults::DEFAULT_FEATURED_PAGES),
            families: FamiliesConfig::default(),
        }
    }
}

/// The two catalog families that match by boolean flag instead of by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamiliesConfig {
    pub apps: FamilyConfig,
    pub services: FamilyConfig,
}

impl Default for FamiliesConfig {
    fn default() -> Self {
        Self {
            apps: FamilyConfig {
                aliases: owned(defaults::DEFAULT_APPS_ALIASES),
                pages: owned(defaults::DEFAULT_APPS_PAGES),
                keywords: owned(defaults::DEFAULT_APPS_KEYWORDS),
                category_terms: owned(defaults::DEFAULT_APPS_CATEGORY_TERMS),
            },
            services: FamilyConfig {
                aliases: owned(defaults::DEFAULT_SERVICES_ALIASES),
                pages: owned(defaults::DEFAULT_SERVICES_PAGES),
                keywords: owned(defaults::DEFAULT_SERVICES_KEYWORDS),
                category_terms: owned(defaults::DEFAULT_SERVICES_CATEGORY_TERMS),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    /// Requested category values that replace name matching with the family rule.
    pub aliases: Vec<String>,
    /// Page slugs that include the family rule.
    pub pages: Vec<String>,
    /// Request tokens that mark a request as belonging to the family for the
    /// flag-only fallback tier.
    pub keywords: Vec<String>,
    /// Substrings of `category` that satisfy the family rule.
    pub category_terms: Vec<String>,
}
