//! The apps and services families: requests that match by boolean flag
//! instead of by category name.

use catalog_core::config::{FamiliesConfig, FamilyConfig};
use catalog_core::models::{Column, Flag, Predicate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    Apps,
    Services,
}

impl FamilyKind {
    pub fn flag(self) -> Flag {
        match self {
            Self::Apps => Flag::AiApp,
            Self::Services => Flag::Service,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Services => "services",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Family {
    pub kind: FamilyKind,
    aliases: Vec<String>,
    pages: Vec<String>,
    keywords: Vec<String>,
    category_terms: Vec<String>,
}

impl Family {
    fn from_config(kind: FamilyKind, config: &FamilyConfig) -> Self {
        let lower = |values: &[String]| -> Vec<String> {
            values
                .iter()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect()
        };
        Self {
            kind,
            aliases: lower(&config.aliases),
            pages: lower(&config.pages),
            keywords: lower(&config.keywords),
            category_terms: lower(&config.category_terms),
        }
    }

    /// Flag set, or `category` containing one of the family's terms.
    pub fn rule(&self) -> Predicate {
        let mut parts = vec![Predicate::FlagSet(self.kind.flag())];
        parts.extend(
            self.category_terms
                .iter()
                .map(|term| Predicate::contains_token(Column::Category, term.clone())),
        );
        Predicate::any(parts)
    }
}

/// Families in precedence order (apps before services).
#[derive(Debug, Clone)]
pub struct FamilyRules {
    families: Vec<Family>,
}

impl FamilyRules {
    pub fn from_config(config: &FamiliesConfig) -> Self {
        Self {
            families: vec![
                Family::from_config(FamilyKind::Apps, &config.apps),
                Family::from_config(FamilyKind::Services, &config.services),
            ],
        }
    }

    /// Family whose alias list holds `value` exactly (case-insensitive).
    pub fn by_alias(&self, value: &str) -> Option<&Family> {
        let value = value.trim().to_lowercase();
        self.families.iter().find(|f| f.aliases.contains(&value))
    }

    /// Family whose page list holds `slug`.
    pub fn by_page(&self, slug: &str) -> Option<&Family> {
        let slug = slug.trim().to_lowercase();
        self.families.iter().find(|f| f.pages.contains(&slug))
    }

    /// Family with a keyword among `tokens`.
    pub fn by_keywords(&self, tokens: &[String]) -> Option<&Family> {
        self.families
            .iter()
            .find(|f| tokens.iter().any(|t| f.keywords.contains(t)))
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::models::{ContentItem, FlagValue};

    use super::*;

    fn rules() -> FamilyRules {
        FamilyRules::from_config(&FamiliesConfig::default())
    }

    #[test]
    fn aliases_are_exact_and_case_insensitive() {
        let rules = rules();
        assert_eq!(rules.by_alias("AI Apps & Services").map(|f| f.kind), Some(FamilyKind::Apps));
        assert_eq!(rules.by_alias("Technology Services").map(|f| f.kind), Some(FamilyKind::Services));
        assert!(rules.by_alias("ai photo apps").is_none());
    }

    #[test]
    fn keywords_detect_family_from_tokens() {
        let rules = rules();
        let tokens = vec!["ai".to_string(), "photo".to_string(), "apps".to_string()];
        assert_eq!(rules.by_keywords(&tokens).map(|f| f.kind), Some(FamilyKind::Apps));
        assert!(rules.by_keywords(&["laptops".to_string()]).is_none());
    }

    #[test]
    fn apps_rule_accepts_flag_or_category_term() {
        let rules = rules();
        let apps = rules.by_page("apps-ai-apps").unwrap().rule();
        let flagged = ContentItem {
            is_ai_app: Some(FlagValue::Text("yes".into())),
            ..Default::default()
        };
        let named = ContentItem {
            category: Some("AI Tools".into()),
            ..Default::default()
        };
        let neither = ContentItem {
            category: Some("Books".into()),
            ..Default::default()
        };
        assert!(apps.evaluate(&flagged));
        assert!(apps.evaluate(&named));
        assert!(!apps.evaluate(&neither));
    }
}
