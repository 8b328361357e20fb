//! Key catalog filtering.

use crate::schema::MemoryKey;
use std::cmp::Ordering;

/// Select keys under a namespace prefix, most recently updated first.
///
/// Matching is an exact, case-sensitive prefix test. The sort is stable, so
/// keys sharing a timestamp keep their catalog order and keys without one
/// (`updated_at == 0`) fall to the end. `limit` truncates after sorting.
pub fn filter_by_prefix(
    keys: &[MemoryKey],
    prefix: &str,
    limit: Option<usize>,
) -> Vec<MemoryKey> {
    let mut filtered: Vec<MemoryKey> = keys
        .iter()
        .filter(|key| key.key_name.starts_with(prefix))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        b.updated_at
            .partial_cmp(&a.updated_at)
            .unwrap_or(Ordering::Equal)
    });

    if let Some(limit) = limit {
        filtered.truncate(limit);
    }

    filtered
}
