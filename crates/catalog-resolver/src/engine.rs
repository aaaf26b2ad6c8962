//! ResolutionEngine: the single resolver every adapter calls.
//!
//! Pipeline per request:
//! taxonomy lookup → primary selection → fallback plan → tier choice →
//! windowed query → normalization.

use catalog_core::config::{ImageProxyConfig, PaginationConfig, SynonymConfig};
use catalog_core::errors::{RequestError, ResolveResult};
use catalog_core::models::{
    BrowsedCategory, CanonicalRecord, Category, ChildCategory, Column, Flag, ListingScope,
    Predicate, RawResolutionParams, ResolutionRequest, ResolutionTarget, Surface,
};
use catalog_core::traits::{ICategoryStore, IContentStore};
use catalog_core::CatalogConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::expansion::{tokenize, SynonymTable};
use crate::fallback::{FallbackController, FallbackInputs, FamilySlot, Tier};
use crate::normalize::ResultNormalizer;
use crate::predicate::{Family, FamilyRules, PredicateBuilder, Selection};
use crate::taxonomy::{TaxonomyMatch, TaxonomyResolver};

/// One page of a resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub items: Vec<CanonicalRecord>,
    /// Tier that served the request; `None` when every tier was empty.
    pub tier: Option<Tier>,
    /// Rows the chosen tier selects across all pages.
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
}

pub struct ResolutionEngine<'a> {
    categories: &'a dyn ICategoryStore,
    content: &'a dyn IContentStore,
    synonyms: SynonymTable,
    families: FamilyRules,
    synonym_config: SynonymConfig,
    images: ImageProxyConfig,
    pagination: PaginationConfig,
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(
        categories: &'a dyn ICategoryStore,
        content: &'a dyn IContentStore,
        config: &CatalogConfig,
    ) -> Self {
        let synonyms = SynonymTable::from_config(&config.synonyms);
        let families = FamilyRules::from_config(&config.synonyms.families);
        debug!(
            tokens = synonyms.token_count(),
            aliases = synonyms.alias_count(),
            "resolution engine ready"
        );
        Self {
            categories,
            content,
            synonyms,
            families,
            synonym_config: config.synonyms.clone(),
            images: config.images.clone(),
            pagination: config.pagination.clone(),
        }
    }

    /// Parse raw category parameters and resolve them.
    pub fn resolve_category(
        &self,
        raw: &RawResolutionParams,
        scope: ListingScope,
    ) -> ResolveResult<ResolvedPage> {
        let request = ResolutionRequest::from_category_params(raw, scope, &self.pagination)?;
        self.resolve(&request)
    }

    /// Parse raw page parameters and resolve them.
    pub fn resolve_page(
        &self,
        raw: &RawResolutionParams,
        scope: ListingScope,
    ) -> ResolveResult<ResolvedPage> {
        let request = ResolutionRequest::from_page_params(raw, scope, &self.pagination)?;
        self.resolve(&request)
    }

    pub fn resolve(&self, request: &ResolutionRequest) -> ResolveResult<ResolvedPage> {
        let builder = self.builder();
        let taxonomy_resolver = TaxonomyResolver::new(self.categories, &self.synonyms);
        let gender = request.gender.as_deref();

        // Step 1: Taxonomy lookup for the category in play, then the primary selection.
        let (primary, taxonomy, page_slug, family) = match &request.target {
            ResolutionTarget::Category { value } => {
                let taxonomy = taxonomy_resolver.resolve(value)?;
                let selection = Selection {
                    page: None,
                    category: Some(builder.category_clause(value, &taxonomy)),
                };
                let family = self.category_family(value).map(FamilySlot::Category);
                (selection, taxonomy, None, family)
            }
            ResolutionTarget::Page { slug, category } => {
                let taxonomy = match category {
                    Some(c) => taxonomy_resolver.resolve(c)?,
                    None => TaxonomyMatch::default(),
                };
                let selection = Selection {
                    page: Some(builder.page_clause(slug)),
                    category: category
                        .as_deref()
                        .map(|c| builder.category_clause(c, &taxonomy)),
                };
                (
                    selection,
                    taxonomy,
                    Some(slug.as_str()),
                    self.page_family(slug, category.as_deref()),
                )
            }
        };
        debug!(request = ?request.target, ?family, "primary selection built");

        // Step 2: Plan tiers and pick the first non-empty one.
        let controller = FallbackController::new(&builder);
        let plans = controller.plan(&FallbackInputs {
            primary,
            page_slug,
            family,
            taxonomy: &taxonomy,
            gender,
        });
        let Some(choice) = controller.choose(self.content, plans)? else {
            info!(request = ?request.target, "no tier selected any rows");
            return Ok(ResolvedPage {
                items: Vec::new(),
                tier: None,
                total: 0,
                limit: request.window.limit,
                offset: request.window.offset,
            });
        };

        // Step 3: Fetch the requested window within the chosen tier.
        let rows = self
            .content
            .query_content(&choice.plan.predicate, request.window)?;

        // Step 4: Normalize.
        let items = ResultNormalizer::new(&self.images).normalize_batch(&rows);

        info!(
            request = ?request.target,
            tier = choice.plan.tier.as_str(),
            total = choice.total,
            returned = items.len(),
            offset = request.window.offset,
            "resolution complete"
        );

        Ok(ResolvedPage {
            items,
            tier: Some(choice.plan.tier),
            total: choice.total,
            limit: request.window.limit,
            offset: request.window.offset,
        })
    }

    /// Active children of a parent category. A matched child category has
    /// none. An unknown parent falls back to the distinct subcategories of
    /// published rows filed under it.
    pub fn list_children(&self, parent: &str) -> ResolveResult<Vec<ChildCategory>> {
        let parent = parent.trim();
        if parent.is_empty() {
            return Err(RequestError::MissingField { field: "parent" }.into());
        }

        let resolved = TaxonomyResolver::new(self.categories, &self.synonyms).resolve(parent)?;
        if resolved.category.is_some() {
            return Ok(resolved
                .children
                .into_iter()
                .map(|name| ChildCategory { name })
                .collect());
        }

        let mut names = vec![Predicate::equals(Column::Category, parent)];
        if let Some(canonical) = self.synonyms.canonical_for(parent) {
            names.push(Predicate::equals(Column::Category, canonical));
        }
        let predicate = Predicate::all(vec![Predicate::any(names), self.builder().gate().clone()]);
        let values = self.content.distinct_values(Column::Subcategory, &predicate)?;
        debug!(parent, found = values.len(), "children derived from content rows");
        Ok(values
            .into_iter()
            .map(|name| ChildCategory { name })
            .collect())
    }

    /// Distinct categories among published rows visible on a page, sorted.
    pub fn categories_for_page(&self, slug: &str) -> ResolveResult<Vec<String>> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(RequestError::MissingField { field: "page" }.into());
        }
        let builder = self.builder();
        let predicate = Predicate::all(vec![builder.page_clause(slug), builder.gate().clone()]);
        Ok(self.content.distinct_values(Column::Category, &predicate)?)
    }

    /// Active top-level categories with published rows on `surface`, in
    /// `(display_order, name)` order. Rows are matched by the category name
    /// or its singular/plural form; categories with no rows are left out.
    pub fn browse_categories(&self, surface: Surface) -> ResolveResult<Vec<BrowsedCategory>> {
        let gate = self.builder().gate().clone();
        let mut browsed = Vec::new();
        for category in self.categories.top_level_categories()? {
            let mut parts = vec![name_forms(&category.name), gate.clone()];
            parts.extend(surface_rule(surface));
            let base = Predicate::all(parts);

            let total_count = self.content.count_content(&base)?;
            if total_count == 0 {
                continue;
            }
            let flagged = |flag: Flag| {
                self.content
                    .count_content(&Predicate::all(vec![base.clone(), Predicate::FlagSet(flag)]))
            };
            let services_count = flagged(Flag::Service)?;
            let apps_count = flagged(Flag::AiApp)?;
            browsed.push(browsed_category(category, total_count, services_count, apps_count));
        }
        info!(surface = surface.as_str(), found = browsed.len(), "categories browsed");
        Ok(browsed)
    }

    fn builder(&self) -> PredicateBuilder<'_> {
        PredicateBuilder::new(&self.synonyms, &self.families, &self.synonym_config)
    }

    fn category_family(&self, value: &str) -> Option<&Family> {
        self.families
            .by_alias(value)
            .or_else(|| self.families.by_keywords(&tokenize(value)))
    }

    /// A family page wins, then the secondary category, then the slug's own words.
    fn page_family(&self, slug: &str, category: Option<&str>) -> Option<FamilySlot<'_>> {
        if let Some(family) = self.families.by_page(slug) {
            return Some(FamilySlot::Page(family));
        }
        if let Some(family) = category.and_then(|c| self.category_family(c)) {
            return Some(FamilySlot::Category(family));
        }
        self.families
            .by_keywords(&tokenize(slug))
            .map(FamilySlot::Page)
    }
}

/// `name`, `name` plus a trailing "s", and `name` without one.
fn name_forms(name: &str) -> Predicate {
    let name = name.trim();
    let mut forms = vec![
        Predicate::equals(Column::Category, name),
        Predicate::equals(Column::Category, format!("{name}s")),
    ];
    if let Some(singular) = name.strip_suffix(['s', 'S']).filter(|s| !s.is_empty()) {
        forms.push(Predicate::equals(Column::Category, singular));
    }
    Predicate::any(forms)
}

fn surface_rule(surface: Surface) -> Option<Predicate> {
    match surface {
        Surface::All => None,
        Surface::Products => Some(Predicate::all(vec![
            Predicate::not(Predicate::FlagSet(Flag::Service)),
            Predicate::not(Predicate::FlagSet(Flag::AiApp)),
        ])),
        Surface::Services => Some(Predicate::FlagSet(Flag::Service)),
        Surface::AiApps => Some(Predicate::FlagSet(Flag::AiApp)),
    }
}

fn browsed_category(
    category: Category,
    total_count: u64,
    services_count: u64,
    apps_count: u64,
) -> BrowsedCategory {
    BrowsedCategory {
        id: category.id,
        name: category.name,
        display_order: category.display_order,
        is_for_products: category.is_for_products,
        is_for_services: category.is_for_services,
        is_for_ai_apps: category.is_for_ai_apps,
        total_count,
        services_count,
        apps_count,
    }
}
