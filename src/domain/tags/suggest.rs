//! Autocomplete ranking for partially typed hashtags
//!
//! Built on top of the registry's query surface: substring filter on the
//! tag id, prefix matches ahead of interior matches, most used first
//! within each group.

use super::registry::{TagEntry, TagRegistry};

/// Default number of suggestions offered while typing.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Rank completion candidates for `search_term`.
///
/// The term is normalized the same way tags are (leading `#` stripped,
/// lowercased). An empty term ranks purely by usage count. Offering a
/// "create new tag" affordance on zero matches is the consumer's concern,
/// not the registry's.
pub fn suggest<'a>(
    registry: &'a TagRegistry,
    search_term: &str,
    limit: usize,
) -> Vec<&'a TagEntry> {
    let term = search_term
        .strip_prefix('#')
        .unwrap_or(search_term)
        .to_lowercase();

    let mut matches: Vec<&TagEntry> = registry
        .all_tags()
        .into_iter()
        .filter(|entry| entry.id.contains(&term))
        .collect();

    matches.sort_by(|a, b| {
        let a_prefix = a.id.starts_with(&term);
        let b_prefix = b.id.starts_with(&term);
        b_prefix
            .cmp(&a_prefix)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.id.cmp(&b.id))
    });
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(counts: &[(&str, u64)]) -> TagRegistry {
        let mut registry = TagRegistry::new();
        for (tag, count) in counts {
            for _ in 0..*count {
                registry.register(tag);
            }
        }
        registry
    }

    #[test]
    fn test_prefix_matches_rank_before_interior_matches() {
        // "process" has the highest count but does not contain "pri" at all;
        // both priority tags do, as prefixes.
        let registry = registry_with(&[
            ("#priority/high", 5),
            ("#priority/low", 2),
            ("#process", 10),
        ]);

        let ids: Vec<&str> = suggest(&registry, "pri", DEFAULT_SUGGESTION_LIMIT)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["priority/high", "priority/low"]);
    }

    #[test]
    fn test_interior_match_included_after_prefix_matches() {
        let registry = registry_with(&[("#shipping", 9), ("#ship", 1)]);

        let ids: Vec<&str> = suggest(&registry, "ship", DEFAULT_SUGGESTION_LIMIT)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        // Both are prefix matches; higher count first.
        assert_eq!(ids, vec!["shipping", "ship"]);

        let ids: Vec<&str> = suggest(&registry, "hip", DEFAULT_SUGGESTION_LIMIT)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        // Neither is a prefix match; count decides.
        assert_eq!(ids, vec!["shipping", "ship"]);
    }

    #[test]
    fn test_leading_hash_and_case_are_normalized() {
        let registry = registry_with(&[("#work", 3)]);
        let ids: Vec<&str> = suggest(&registry, "#WOR", DEFAULT_SUGGESTION_LIMIT)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["work"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let registry = registry_with(&[
            ("#task/a", 1),
            ("#task/b", 2),
            ("#task/c", 3),
            ("#task/d", 4),
            ("#task/e", 5),
            ("#task/f", 6),
        ]);
        assert_eq!(suggest(&registry, "task", 5).len(), 5);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let registry = registry_with(&[("#work", 1)]);
        assert!(suggest(&registry, "zzz", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_empty_term_ranks_by_count() {
        let registry = registry_with(&[("#rare", 1), ("#common", 4)]);
        let ids: Vec<&str> = suggest(&registry, "", DEFAULT_SUGGESTION_LIMIT)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["common", "rare"]);
    }
}
