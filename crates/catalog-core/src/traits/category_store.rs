use crate::errors::StorageError;
use crate::models::Category;

/// Read-only access to the hierarchical taxonomy.
pub trait ICategoryStore: Send + Sync {
    /// Active category whose name equals `name` case-insensitively.
    /// Top-level categories win over children with the same name.
    fn find_category(&self, name: &str) -> Result<Option<Category>, StorageError>;

    /// Active direct children of `parent_id`, ordered by
    /// `(display_order ASC, name ASC)`.
    fn active_children(&self, parent_id: i64) -> Result<Vec<Category>, StorageError>;

    /// Active categories without a parent, ordered by
    /// `(display_order ASC, name ASC)`.
    fn top_level_categories(&self) -> Result<Vec<Category>, StorageError>;
}
