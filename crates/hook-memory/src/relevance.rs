//! Relevance filtering of discovery results.

use crate::schema::DiscoveryResult;

/// Keep the key names the current user may see and the service scored at or
/// above `threshold` (inclusive), capped to the first `cap` entries.
///
/// The service returns results relevance-ranked; that order is preserved,
/// never re-sorted. An empty return means "no relevant memories", not an
/// error.
pub fn filter_relevant(
    results: &[DiscoveryResult],
    user_prefix: &str,
    threshold: f64,
    cap: usize,
) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.key_name.starts_with(user_prefix) && r.score >= threshold)
        .take(cap)
        .map(|r| r.key_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(key_name: &str, score: f64) -> DiscoveryResult {
        DiscoveryResult {
            key_name: key_name.to_string(),
            score,
        }
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let results = vec![
            result("@u/x", 0.7),
            result("@other/y", 0.9),
            result("@u/z", 0.5),
        ];
        assert_eq!(filter_relevant(&results, "@u/", 0.7, 5), vec!["@u/x"]);
    }

    #[test]
    fn test_just_below_threshold_is_dropped() {
        let results = vec![result("@u/x", 0.7 - 1e-9)];
        assert!(filter_relevant(&results, "@u/", 0.7, 5).is_empty());
    }

    #[test]
    fn test_order_preserved_and_capped() {
        let results = vec![
            result("@u/a", 0.9),
            result("@u/b", 0.95),
            result("@u/c", 0.8),
        ];
        assert_eq!(
            filter_relevant(&results, "@u/", 0.7, 2),
            vec!["@u/a", "@u/b"]
        );
    }

    #[test]
    fn test_empty_results() {
        assert!(filter_relevant(&[], "@u/", 0.7, 5).is_empty());
    }

    #[test]
    fn test_threshold_above_all_scores() {
        let results = vec![result("@u/a", 0.4), result("@u/b", 0.6)];
        assert!(filter_relevant(&results, "@u/", 0.99, 5).is_empty());
    }
}
