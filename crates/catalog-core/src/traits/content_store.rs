use crate::errors::StorageError;
use crate::models::{Column, ContentItem, PageWindow, Predicate};

/// Read-only access to catalog rows, filtered by compiled predicates.
///
/// Implementations must agree with [`Predicate::evaluate`] on which rows
/// qualify.
pub trait IContentStore: Send + Sync {
    fn count_content(&self, predicate: &Predicate) -> Result<u64, StorageError>;

    /// Qualifying rows ordered by `(created_at DESC, id DESC)`, windowed.
    fn query_content(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> Result<Vec<ContentItem>, StorageError>;

    /// Distinct non-blank values of `column` among qualifying rows, ascending.
    fn distinct_values(
        &self,
        column: Column,
        predicate: &Predicate,
    ) -> Result<Vec<String>, StorageError>;
}
