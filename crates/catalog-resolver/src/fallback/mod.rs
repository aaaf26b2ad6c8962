//! Tiered fallback when the primary predicate selects nothing.

pub mod controller;
pub mod tier;

pub use controller::{FallbackController, FallbackInputs, FamilySlot, TierChoice};
pub use tier::{Tier, TierPlan};
