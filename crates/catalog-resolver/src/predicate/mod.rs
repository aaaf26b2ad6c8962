//! Predicate construction: publication gate, family rules, and the builder
//! that turns a request plus taxonomy snapshot into a [`Selection`].

pub mod builder;
pub mod family;
pub mod gate;

pub use builder::{PredicateBuilder, Selection};
pub use family::{Family, FamilyKind, FamilyRules};
pub use gate::publication_gate;
