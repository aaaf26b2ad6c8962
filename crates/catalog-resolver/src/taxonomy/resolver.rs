//! Resolves a requested category name to a Category row and its children.
//!
//! Lookup order: case-insensitive name match, then the alias table's
//! canonical name. Only a top-level match has children, and traversal never
//! goes past one hop, so a self-referencing or deeper chain cannot loop.

use catalog_core::errors::StorageError;
use catalog_core::models::Category;
use catalog_core::traits::ICategoryStore;
use tracing::debug;

use crate::expansion::SynonymTable;

/// Outcome of a taxonomy lookup. No match is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyMatch {
    pub category: Option<Category>,
    /// Active child names ordered by `(display_order, name)`.
    pub children: Vec<String>,
}

impl TaxonomyMatch {
    pub fn is_parent_with_children(&self) -> bool {
        self.category.as_ref().is_some_and(Category::is_top_level) && !self.children.is_empty()
    }

    pub fn matched_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

pub struct TaxonomyResolver<'a> {
    store: &'a dyn ICategoryStore,
    synonyms: &'a SynonymTable,
}

impl<'a> TaxonomyResolver<'a> {
    pub fn new(store: &'a dyn ICategoryStore, synonyms: &'a SynonymTable) -> Self {
        Self { store, synonyms }
    }

    pub fn resolve(&self, requested: &str) -> Result<TaxonomyMatch, StorageError> {
        let requested = requested.trim();
        if requested.is_empty() {
            return Ok(TaxonomyMatch::default());
        }

        let mut category = self.store.find_category(requested)?;
        if category.is_none() {
            if let Some(canonical) = self.synonyms.canonical_for(requested) {
                debug!(requested, canonical, "retrying category lookup via alias");
                category = self.store.find_category(canonical)?;
            }
        }

        let Some(category) = category else {
            debug!(requested, "no category matched");
            return Ok(TaxonomyMatch::default());
        };

        let children = if category.is_top_level() {
            self.store
                .active_children(category.id)?
                .into_iter()
                .filter(|child| child.id != category.id)
                .map(|child| child.name)
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            requested,
            matched = %category.name,
            children = children.len(),
            "category resolved"
        );
        Ok(TaxonomyMatch {
            category: Some(category),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::config::SynonymConfig;

    use super::*;

    struct FakeCategories(Vec<Category>);

    impl ICategoryStore for FakeCategories {
        fn find_category(&self, name: &str) -> Result<Option<Category>, StorageError> {
            Ok(self
                .0
                .iter()
                .find(|c| c.is_active && c.name.eq_ignore_ascii_case(name))
                .cloned())
        }

        fn active_children(&self, parent_id: i64) -> Result<Vec<Category>, StorageError> {
            let mut children: Vec<Category> = self
                .0
                .iter()
                .filter(|c| c.is_active && c.parent_id == Some(parent_id))
                .cloned()
                .collect();
            children.sort_by(|a, b| (a.display_order, &a.name).cmp(&(b.display_order, &b.name)));
            Ok(children)
        }

        fn top_level_categories(&self) -> Result<Vec<Category>, StorageError> {
            Ok(self
                .0
                .iter()
                .filter(|c| c.is_active && c.is_top_level())
                .cloned()
                .collect())
        }
    }

    fn cat(id: i64, name: &str, parent_id: Option<i64>) -> Category {
        Category {
            id,
            name: name.into(),
            parent_id,
            is_active: true,
            display_order: 0,
            is_for_products: true,
            is_for_services: false,
            is_for_ai_apps: false,
        }
    }

    fn store() -> FakeCategories {
        FakeCategories(vec![
            cat(1, "Electronics & Gadgets", None),
            cat(2, "Laptops", Some(1)),
            cat(3, "Cameras", Some(1)),
            cat(4, "Gaming Laptops", Some(2)),
        ])
    }

    #[test]
    fn parent_lists_children_in_order() {
        let store = store();
        let synonyms = SynonymTable::from_config(&SynonymConfig::default());
        let m = TaxonomyResolver::new(&store, &synonyms)
            .resolve("electronics & gadgets")
            .unwrap();
        assert_eq!(m.matched_name(), Some("Electronics & Gadgets"));
        assert_eq!(m.children, vec!["Cameras", "Laptops"]);
        assert!(m.is_parent_with_children());
    }

    #[test]
    fn child_match_has_no_children() {
        let store = store();
        let synonyms = SynonymTable::from_config(&SynonymConfig::default());
        let m = TaxonomyResolver::new(&store, &synonyms).resolve("laptops").unwrap();
        assert_eq!(m.matched_name(), Some("Laptops"));
        assert!(m.children.is_empty());
    }

    #[test]
    fn alias_resolves_to_canonical_category() {
        let store = store();
        let synonyms = SynonymTable::from_config(&SynonymConfig::default());
        let m = TaxonomyResolver::new(&store, &synonyms).resolve("Tech").unwrap();
        assert_eq!(m.matched_name(), Some("Electronics & Gadgets"));
    }

    #[test]
    fn self_parent_is_skipped() {
        let mut looped = cat(9, "Loop", None);
        looped.parent_id = None;
        let mut own_child = cat(9, "Loop", Some(9));
        own_child.display_order = 1;
        let store = FakeCategories(vec![looped, own_child]);
        let synonyms = SynonymTable::default();
        let m = TaxonomyResolver::new(&store, &synonyms).resolve("loop").unwrap();
        assert!(m.children.is_empty());
    }

    #[test]
    fn unknown_and_blank_are_empty_matches() {
        let store = store();
        let synonyms = SynonymTable::default();
        let resolver = TaxonomyResolver::new(&store, &synonyms);
        assert_eq!(resolver.resolve("Garden").unwrap(), TaxonomyMatch::default());
        assert_eq!(resolver.resolve("  ").unwrap(), TaxonomyMatch::default());
    }
}
