//! Derives the fallback tiers for a request and picks the first one that
//! selects any row.
//!
//! Each tier swaps one slot of the primary [`Selection`] and re-applies the
//! publication gate and gender filter. A tier whose final predicate equals
//! one already planned is dropped, so no predicate is counted twice.
//! Selection is by existence (`count > 0`), so every page of a request is
//! served from the same tier.

use catalog_core::errors::StorageError;
use catalog_core::traits::IContentStore;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::tier::{Tier, TierPlan};
use crate::predicate::builder::children_clause;
use crate::predicate::{Family, PredicateBuilder, Selection};
use crate::taxonomy::TaxonomyMatch;

/// Where a recognized family was detected, which decides the slot its flag
/// rule replaces in the flag-only tier.
#[derive(Debug, Clone, Copy)]
pub enum FamilySlot<'a> {
    Page(&'a Family),
    Category(&'a Family),
}

pub struct FallbackInputs<'a> {
    pub primary: Selection,
    /// Page slug for page requests.
    pub page_slug: Option<&'a str>,
    pub family: Option<FamilySlot<'a>>,
    /// Taxonomy match for the category in play (requested or secondary).
    pub taxonomy: &'a TaxonomyMatch,
    pub gender: Option<&'a str>,
}

/// The tier that will serve a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierChoice {
    pub plan: TierPlan,
    /// Rows the tier selects in total.
    pub total: u64,
}

pub struct FallbackController<'b, 'a> {
    builder: &'b PredicateBuilder<'a>,
}

impl<'b, 'a> FallbackController<'b, 'a> {
    pub fn new(builder: &'b PredicateBuilder<'a>) -> Self {
        Self { builder }
    }

    /// Primary tier followed by every applicable broader tier, deduplicated.
    pub fn plan(&self, inputs: &FallbackInputs<'_>) -> Vec<TierPlan> {
        let mut candidates = vec![(Tier::Primary, inputs.primary.clone())];

        // 1. Flag-only: the family rule alone in the slot it was detected in.
        if let Some(slot) = inputs.family {
            let selection = match slot {
                FamilySlot::Page(family) => Selection {
                    page: Some(family.rule()),
                    category: inputs.primary.category.clone(),
                },
                FamilySlot::Category(family) => Selection {
                    page: inputs.primary.page.clone(),
                    category: Some(family.rule()),
                },
            };
            candidates.push((Tier::FlagOnly, selection));
        }

        // 2. Parent broadening: children only, no name or token constraint.
        if inputs.taxonomy.is_parent_with_children() {
            if let Some(children) = children_clause(&inputs.taxonomy.children) {
                candidates.push((
                    Tier::ParentBroadening,
                    Selection {
                        page: inputs.primary.page.clone(),
                        category: Some(children),
                    },
                ));
            }
        }

        // 3. Feature flag: featured pages only.
        if let Some(featured) = inputs.page_slug.and_then(|s| self.builder.featured_clause(s)) {
            candidates.push((
                Tier::FeatureFlag,
                Selection {
                    page: Some(featured),
                    category: inputs.primary.category.clone(),
                },
            ));
        }

        let mut seen = FxHashSet::default();
        candidates
            .into_iter()
            .filter_map(|(tier, selection)| {
                let predicate = self.builder.finish(&selection, inputs.gender);
                if seen.insert(predicate.clone()) {
                    Some(TierPlan { tier, predicate })
                } else {
                    debug!(tier = tier.as_str(), "skipping tier identical to an earlier one");
                    None
                }
            })
            .collect()
    }

    /// First planned tier that selects at least one row, or `None` when every
    /// tier is empty.
    pub fn choose(
        &self,
        store: &dyn IContentStore,
        plans: Vec<TierPlan>,
    ) -> Result<Option<TierChoice>, StorageError> {
        for plan in plans {
            let total = store.count_content(&plan.predicate)?;
            debug!(tier = plan.tier.as_str(), total, "tier evaluated");
            if total > 0 {
                return Ok(Some(TierChoice { plan, total }));
            }
        }
        Ok(None)
    }
}
