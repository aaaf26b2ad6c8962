//! Property tests: case-insensitivity, synonym symmetry, pagination
//! contiguity, idempotence.

use catalog_core::models::{PageWindow, ResolutionRequest};
use catalog_core::CatalogConfig;
use catalog_resolver::expansion::{expand, tokenize, SynonymTable};
use catalog_resolver::{ResolutionEngine, ResolvedPage};
use proptest::prelude::*;
use test_fixtures::storefront_engine;

const PARENT: &str = "Electronics & Gadgets";

fn resolve(value: &str, window: PageWindow) -> ResolvedPage {
    let store = storefront_engine();
    let config = CatalogConfig::default();
    let engine = ResolutionEngine::new(&store, &store, &config);
    engine
        .resolve(&ResolutionRequest::category(value, window))
        .unwrap()
}

fn ids(page: &ResolvedPage) -> Vec<i64> {
    page.items.iter().map(|r| r.id).collect()
}

fn full() -> PageWindow {
    PageWindow {
        limit: 100,
        offset: 0,
    }
}

#[test]
fn synonym_pairs_resolve_identically() {
    for (a, b) in [
        ("tv", "television"),
        ("laptop", "notebook"),
        ("headphones", "earbuds"),
        ("Sneakers", "footwear"),
    ] {
        assert_eq!(ids(&resolve(a, full())), ids(&resolve(b, full())), "{a} vs {b}");
    }
}

#[test]
fn identical_requests_serialize_identically() {
    let first = serde_json::to_string(&resolve(PARENT, full())).unwrap();
    let second = serde_json::to_string(&resolve(PARENT, full())).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("\"tier\":\"primary\""));
    assert!(first.contains("\"isFeatured\""));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_category_case_is_irrelevant(flips in prop::collection::vec(any::<bool>(), PARENT.len())) {
        let mangled: String = PARENT
            .chars()
            .zip(flips)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert_eq!(ids(&resolve(&mangled, full())), ids(&resolve(PARENT, full())));
    }

    #[test]
    fn prop_pages_are_disjoint_and_contiguous(limit in 1u32..=5) {
        let everything = ids(&resolve(PARENT, full()));
        let mut stitched = Vec::new();
        let mut offset = 0u64;
        loop {
            let page = resolve(PARENT, PageWindow { limit, offset });
            prop_assert!(page.items.len() <= limit as usize);
            if page.items.is_empty() {
                break;
            }
            stitched.extend(ids(&page));
            offset += u64::from(limit);
        }
        prop_assert_eq!(stitched, everything);
    }

    #[test]
    fn prop_expansion_is_deterministic(raw in "[a-zA-Z &/-]{0,40}") {
        let table = SynonymTable::from_config(&CatalogConfig::default().synonyms);
        let first = expand(&raw, &table);
        prop_assert_eq!(&first, &expand(&raw, &table));
        // Source tokens always lead, in order.
        let source = tokenize(&raw);
        prop_assert_eq!(&first[..source.len()], &source[..]);
    }
}
