//! # catalog-core
//!
//! Foundation crate for the catalog resolution engine.
//! Defines the catalog models, the typed predicate expression, the store
//! traits, errors, config, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::CatalogConfig;
pub use errors::{ResolveError, ResolveResult};
pub use models::{
    normalize_boolean, CanonicalRecord, Category, Column, ContentItem, Flag, FlagValue,
    PageWindow, Predicate, ResolutionRequest, ResolutionTarget,
};
