//! Sort-key engine.
//!
//! Each group's `SortKey` resolves once into a plain comparator value;
//! buckets are sorted with `sort_by`, which is stable, so imports with
//! equal keys keep their original relative order.

use crate::models::group::SortKey;
use crate::models::import::ImportRecord;
use std::cmp::Ordering;

/// Comparator for one group's sort key.
pub fn comparator(key: SortKey) -> impl Fn(&ImportRecord, &ImportRecord) -> Ordering {
    move |a, b| match key {
        SortKey::Alphabetical => a
            .module_path
            .to_lowercase()
            .cmp(&b.module_path.to_lowercase()),
        SortKey::LengthFrom => a.module_path.len().cmp(&b.module_path.len()),
        SortKey::LengthFull => a.full_text.len().cmp(&b.full_text.len()),
    }
}

/// Fixed fallback for the default bucket: ascending module-path length,
/// regardless of any group configuration.
pub fn default_bucket_comparator() -> impl Fn(&ImportRecord, &ImportRecord) -> Ordering {
    |a, b| a.module_path.len().cmp(&b.module_path.len())
}
