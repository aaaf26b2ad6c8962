//! Builds the typed predicate for a resolution request.
//!
//! The builder is pure: given the request text, a taxonomy snapshot and the
//! immutable tables it always yields the same predicate. A request's
//! predicate is kept as a [`Selection`] of independent slots so fallback
//! tiers can replace one slot and keep the rest.

use catalog_core::config::SynonymConfig;
use catalog_core::models::{Column, Flag, Predicate};

use super::family::FamilyRules;
use super::gate::publication_gate;
use crate::expansion::{self, SynonymTable};
use crate::taxonomy::TaxonomyMatch;

/// The swappable parts of a resolution predicate. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Page membership rule (page requests only).
    pub page: Option<Predicate>,
    /// Category rule: the requested category, or a page request's secondary filter.
    pub category: Option<Predicate>,
}

pub struct PredicateBuilder<'a> {
    synonyms: &'a SynonymTable,
    families: &'a FamilyRules,
    legacy_blank_pages: Vec<String>,
    featured_pages: Vec<String>,
    gate: Predicate,
}

impl<'a> PredicateBuilder<'a> {
    pub fn new(
        synonyms: &'a SynonymTable,
        families: &'a FamilyRules,
        config: &SynonymConfig,
    ) -> Self {
        let lower = |pages: &[String]| -> Vec<String> {
            pages.iter().map(|p| p.trim().to_lowercase()).collect()
        };
        Self {
            synonyms,
            families,
            legacy_blank_pages: lower(&config.legacy_blank_pages),
            featured_pages: lower(&config.featured_pages),
            gate: publication_gate(),
        }
    }

    /// Rule for a requested category name.
    ///
    /// A family alias replaces name matching with the family rule. Otherwise
    /// a row qualifies on name equality (requested or matched name), child
    /// membership in `category`/`subcategory`, or any expanded token found in
    /// `category`, `subcategory` or `tags`.
    pub fn category_clause(&self, requested: &str, taxonomy: &TaxonomyMatch) -> Predicate {
        let requested = requested.trim();
        if let Some(family) = self.families.by_alias(requested) {
            return family.rule();
        }

        let mut parts = vec![Predicate::equals(Column::Category, requested)];
        if let Some(name) = taxonomy.matched_name() {
            if !name.eq_ignore_ascii_case(requested) {
                parts.push(Predicate::equals(Column::Category, name));
            }
        }
        if let Some(children) = children_clause(&taxonomy.children) {
            parts.push(children);
        }
        for token in expansion::expand(requested, self.synonyms) {
            for column in [Column::Category, Column::Subcategory, Column::Tags] {
                parts.push(Predicate::contains_token(column, token.clone()));
            }
        }
        Predicate::any(parts)
    }

    /// Rule for a page slug: display-pages membership, plus the family rule
    /// on family pages and blank display pages on legacy pages.
    pub fn page_clause(&self, slug: &str) -> Predicate {
        let slug = normalize_slug(slug);
        let mut parts = vec![Predicate::has_page(slug.clone())];
        if let Some(family) = self.families.by_page(&slug) {
            parts.push(family.rule());
        }
        if self.legacy_blank_pages.contains(&slug) {
            parts.push(Predicate::IsBlank(Column::DisplayPages));
        }
        Predicate::any(parts)
    }

    /// Broadened page rule for featured pages; `None` for other pages.
    pub fn featured_clause(&self, slug: &str) -> Option<Predicate> {
        let slug = normalize_slug(slug);
        if !self.featured_pages.contains(&slug) {
            return None;
        }
        Some(Predicate::any(vec![
            Predicate::FlagSet(Flag::Featured),
            Predicate::has_page(slug.clone()),
            Predicate::equals(Column::PageType, slug),
        ]))
    }

    /// Combine a selection with the publication gate and optional gender filter.
    pub fn finish(&self, selection: &Selection, gender: Option<&str>) -> Predicate {
        let mut parts = Vec::with_capacity(4);
        parts.extend(selection.page.iter().cloned());
        parts.extend(selection.category.iter().cloned());
        parts.push(self.gate.clone());
        if let Some(gender) = gender {
            parts.push(Predicate::equals(Column::Gender, gender));
        }
        Predicate::all(parts)
    }

    pub fn gate(&self) -> &Predicate {
        &self.gate
    }
}

/// `category` or `subcategory` in `children`; `None` when there are none.
pub fn children_clause(children: &[String]) -> Option<Predicate> {
    if children.is_empty() {
        return None;
    }
    Some(Predicate::any(vec![
        Predicate::in_set(Column::Category, children.to_vec()),
        Predicate::in_set(Column::Subcategory, children.to_vec()),
    ]))
}

fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}
