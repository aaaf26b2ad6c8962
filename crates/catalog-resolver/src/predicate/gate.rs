use catalog_core::constants::{ARCHIVED_PROCESSING_STATUS, PUBLIC_VISIBILITIES, PUBLISHED_STATUSES};
use catalog_core::models::{Column, Predicate};

/// Eligibility for any output. Each gate column passes when NULL.
pub fn publication_gate() -> Predicate {
    let owned = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
    Predicate::all(vec![
        Predicate::any(vec![
            Predicate::IsNull(Column::Status),
            Predicate::in_set(Column::Status, owned(PUBLISHED_STATUSES)),
        ]),
        Predicate::any(vec![
            Predicate::IsNull(Column::Visibility),
            Predicate::in_set(Column::Visibility, owned(PUBLIC_VISIBILITIES)),
        ]),
        Predicate::any(vec![
            Predicate::IsNull(Column::ProcessingStatus),
            Predicate::not(Predicate::equals(
                Column::ProcessingStatus,
                ARCHIVED_PROCESSING_STATUS,
            )),
        ]),
    ])
}
