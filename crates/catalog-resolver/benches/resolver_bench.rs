use catalog_core::models::{PageWindow, ResolutionRequest};
use catalog_core::CatalogConfig;
use catalog_resolver::expansion::{expand, SynonymTable};
use catalog_resolver::ResolutionEngine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_fixtures::storefront_engine;

fn bench_expand(c: &mut Criterion) {
    let table = SynonymTable::from_config(&CatalogConfig::default().synonyms);
    c.bench_function("expand_parent_category", |b| {
        b.iter(|| expand(black_box("Electronics & Gadgets / TV-Laptops"), &table))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let store = storefront_engine();
    let config = CatalogConfig::default();
    let engine = ResolutionEngine::new(&store, &store, &config);
    let window = PageWindow {
        limit: 50,
        offset: 0,
    };
    let parent = ResolutionRequest::category("Electronics & Gadgets", window);
    let fallback = ResolutionRequest::category("AI Photo Apps", window);

    c.bench_function("resolve_parent_category", |b| {
        b.iter(|| engine.resolve(black_box(&parent)).unwrap())
    });
    c.bench_function("resolve_flag_only_fallback", |b| {
        b.iter(|| engine.resolve(black_box(&fallback)).unwrap())
    });
}

criterion_group!(benches, bench_expand, bench_resolve);
criterion_main!(benches);
