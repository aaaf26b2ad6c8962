//! Synonym table and token expansion.

pub mod synonym_table;
pub mod token_expander;

pub use synonym_table::SynonymTable;
pub use token_expander::{expand, tokenize};
