//! Seams between the resolver and its collaborator stores.

pub mod category_store;
pub mod content_store;

pub use category_store::ICategoryStore;
pub use content_store::IContentStore;
