//! Predicate → SQL compilation.

pub mod compile;

pub use compile::{compile, truthy_sql, CompiledPredicate, ORDER_BY_NEWEST};
