//! Category lookup against the taxonomy store.

pub mod resolver;

pub use resolver::{TaxonomyMatch, TaxonomyResolver};
