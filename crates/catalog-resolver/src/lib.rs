//! # catalog-resolver
//!
//! Turns a category name or page slug into the catalog rows that qualify.
//!
//! Pipeline: token expansion + taxonomy lookup → predicate building →
//! content-store query → tiered fallback on empty results → normalization
//! into canonical records.

pub mod engine;
pub mod expansion;
pub mod fallback;
pub mod normalize;
pub mod predicate;
pub mod taxonomy;

pub use engine::{ResolutionEngine, ResolvedPage};
pub use fallback::Tier;
