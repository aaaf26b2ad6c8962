//! Catalog data model.

pub mod category;
pub mod content_item;
pub mod flag;
pub mod predicate;
pub mod record;
pub mod request;

pub use category::{BrowsedCategory, Category, ChildCategory, Surface};
pub use content_item::{ContentItem, RawTimestamp};
pub use flag::{normalize_boolean, FlagValue};
pub use predicate::{normalize_page_list, Column, Flag, Predicate};
pub use record::CanonicalRecord;
pub use request::{
    ListingScope, PageWindow, RawResolutionParams, ResolutionRequest, ResolutionTarget,
};
