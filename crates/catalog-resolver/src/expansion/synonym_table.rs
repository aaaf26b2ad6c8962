//! Immutable token-synonym and category-alias lookup, built once from config.

use catalog_core::config::SynonymConfig;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    /// Token → the other members of every group it belongs to, in config order.
    synonyms: FxHashMap<String, Vec<String>>,
    /// Normalized alias phrase → canonical category name.
    aliases: FxHashMap<String, String>,
}

impl SynonymTable {
    pub fn from_config(config: &SynonymConfig) -> Self {
        let mut synonyms: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for group in &config.groups {
            let members: Vec<String> = group.iter().map(|t| normalize_phrase(t)).collect();
            for member in &members {
                let entry = synonyms.entry(member.clone()).or_default();
                for other in &members {
                    if other != member && !entry.contains(other) {
                        entry.push(other.clone());
                    }
                }
            }
        }

        let aliases = config
            .aliases
            .iter()
            .map(|(alias, canonical)| (normalize_phrase(alias), canonical.trim().to_string()))
            .collect();

        Self { synonyms, aliases }
    }

    /// Direct synonyms of `token`. Never transitive.
    pub fn synonyms_of(&self, token: &str) -> &[String] {
        self.synonyms.get(token).map_or(&[], Vec::as_slice)
    }

    /// Canonical category name for an alias phrase, if one is configured.
    pub fn canonical_for(&self, phrase: &str) -> Option<&str> {
        self.aliases.get(&normalize_phrase(phrase)).map(String::as_str)
    }

    pub fn token_count(&self) -> usize {
        self.synonyms.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

/// Lowercase, trim, and collapse inner whitespace.
fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SynonymTable {
        SynonymTable::from_config(&SynonymConfig::default())
    }

    #[test]
    fn groups_are_symmetric() {
        let t = table();
        assert!(t.synonyms_of("tv").contains(&"television".to_string()));
        assert!(t.synonyms_of("television").contains(&"tv".to_string()));
        assert!(!t.synonyms_of("tv").contains(&"tv".to_string()));
        assert!(t.synonyms_of("sofa").is_empty());
    }

    #[test]
    fn expansion_is_one_level() {
        let config = SynonymConfig {
            groups: vec![
                vec!["a".into(), "b".into()],
                vec!["b".into(), "c".into()],
            ],
            ..Default::default()
        };
        let t = SynonymTable::from_config(&config);
        assert_eq!(t.synonyms_of("a"), ["b".to_string()]);
        assert_eq!(t.synonyms_of("b"), ["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn aliases_ignore_case_and_spacing() {
        let t = table();
        assert_eq!(t.canonical_for("  AI   Apps "), Some("Apps & AI Apps"));
        assert_eq!(t.canonical_for("Tech"), Some("Electronics & Gadgets"));
        assert_eq!(t.canonical_for("laptops"), None);
    }
}
