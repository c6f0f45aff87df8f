//! Tag registry: usage counts and recency per unique tag identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Namespace used when a tag has no `namespace/` prefix.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default size of the popular-tags listing.
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

/// One registry row per unique tag identity.
///
/// `id` is the lowercased lookup key (`namespace/value`, or bare `value`
/// when the tag was written without a namespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub id: String,
    pub namespace: String,
    pub value: String,
    pub count: u64,
    pub last_used: DateTime<Utc>,
}

impl TagEntry {
    /// Canonical display form: `namespace/value`, or bare `value` for the
    /// default namespace.
    pub fn display_name(&self) -> String {
        if self.namespace == DEFAULT_NAMESPACE {
            self.value.clone()
        } else {
            format!("{}/{}", self.namespace, self.value)
        }
    }
}

/// In-memory catalogue of hashtags discovered during tokenization.
///
/// Constructor-injected wherever tag statistics are needed; persistence is
/// whole-state load/save at the infrastructure boundary.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    entries: HashMap<String, TagEntry>,
}

impl TagRegistry {
    pub fn new() -> Self {
        TagRegistry::default()
    }

    /// Rebuild a registry from previously persisted entries.
    pub fn from_entries(entries: Vec<TagEntry>) -> Self {
        TagRegistry {
            entries: entries.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Drain the registry into entries sorted by id, for persistence.
    pub fn into_entries(self) -> Vec<TagEntry> {
        let mut entries: Vec<TagEntry> = self.entries.into_values().collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TagEntry> {
        self.entries.get(id)
    }

    /// Register one observed occurrence of a tag.
    ///
    /// Strips a leading `#`, lowercases, and decomposes into namespace and
    /// value. A first occurrence creates the entry with `count = 1`; every
    /// later occurrence increments the count and refreshes `last_used`.
    /// A tag that is empty after stripping is rejected as a no-op.
    ///
    /// Returns whether the occurrence was recorded.
    pub fn register(&mut self, raw_tag: &str) -> bool {
        self.register_at(raw_tag, Utc::now())
    }

    /// `register` with an explicit timestamp.
    pub fn register_at(&mut self, raw_tag: &str, when: DateTime<Utc>) -> bool {
        let normalized = raw_tag.strip_prefix('#').unwrap_or(raw_tag).to_lowercase();
        if normalized.is_empty() {
            return false;
        }

        let (id, namespace, value) = decompose(&normalized);
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.count += 1;
                entry.last_used = when;
            }
            None => {
                self.entries.insert(
                    id.clone(),
                    TagEntry {
                        id,
                        namespace,
                        value,
                        count: 1,
                        last_used: when,
                    },
                );
            }
        }
        true
    }

    /// All entries, most used first (ties break on id for a stable order).
    pub fn all_tags(&self) -> Vec<&TagEntry> {
        let mut tags: Vec<&TagEntry> = self.entries.values().collect();
        sort_by_count(&mut tags);
        tags
    }

    /// Entries in the given namespace (case-insensitive), most used first.
    pub fn tags_in_namespace(&self, namespace: &str) -> Vec<&TagEntry> {
        let wanted = namespace.to_lowercase();
        let mut tags: Vec<&TagEntry> = self
            .entries
            .values()
            .filter(|e| e.namespace == wanted)
            .collect();
        sort_by_count(&mut tags);
        tags
    }

    /// The top `limit` entries by usage count.
    pub fn popular_tags(&self, limit: usize) -> Vec<&TagEntry> {
        let mut tags = self.all_tags();
        tags.truncate(limit);
        tags
    }
}

fn sort_by_count(tags: &mut [&TagEntry]) {
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
}

/// Split a normalized (lowercased, `#`-stripped) tag into (id, namespace,
/// value). A `/` with a non-empty segment on each side is a namespaced tag;
/// anything else falls back to the default namespace with the whole text as
/// the value.
fn decompose(normalized: &str) -> (String, String, String) {
    match normalized.split_once('/') {
        Some((namespace, value)) if !namespace.is_empty() && !value.is_empty() => (
            format!("{}/{}", namespace, value),
            namespace.to_string(),
            value.to_string(),
        ),
        _ => (
            normalized.to_string(),
            DEFAULT_NAMESPACE.to_string(),
            normalized.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    #[test]
    fn test_register_creates_entry_with_count_one() {
        let mut registry = TagRegistry::new();
        assert!(registry.register("#work"));

        let entry = registry.get("work").unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(entry.namespace, "default");
        assert_eq!(entry.value, "work");
    }

    #[test]
    fn test_count_increments_once_per_call() {
        let mut registry = TagRegistry::new();
        for _ in 0..4 {
            registry.register("#work");
        }
        assert_eq!(registry.get("work").unwrap().count, 4);
    }

    #[test]
    fn test_namespace_decomposition() {
        let mut registry = TagRegistry::new();
        registry.register("#priority/high");
        registry.register("#urgent");

        let namespaced = registry.get("priority/high").unwrap();
        assert_eq!(namespaced.namespace, "priority");
        assert_eq!(namespaced.value, "high");
        assert_eq!(namespaced.display_name(), "priority/high");

        let bare = registry.get("urgent").unwrap();
        assert_eq!(bare.namespace, "default");
        assert_eq!(bare.value, "urgent");
        assert_eq!(bare.display_name(), "urgent");
    }

    #[test]
    fn test_namespace_takes_first_slash_only() {
        let mut registry = TagRegistry::new();
        registry.register("#area/sub/deep");

        let entry = registry.get("area/sub/deep").unwrap();
        assert_eq!(entry.namespace, "area");
        assert_eq!(entry.value, "sub/deep");
    }

    #[test]
    fn test_malformed_namespace_falls_back_to_default() {
        let mut registry = TagRegistry::new();
        registry.register("#/odd");
        registry.register("#odd/");

        assert_eq!(registry.get("/odd").unwrap().namespace, "default");
        assert_eq!(registry.get("odd/").unwrap().namespace, "default");
    }

    #[test]
    fn test_lowercase_normalization_merges_identities() {
        let mut registry = TagRegistry::new();
        registry.register("#Work");
        registry.register("#WORK");
        registry.register("work");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("work").unwrap().count, 3);
    }

    #[test]
    fn test_empty_tag_is_rejected() {
        let mut registry = TagRegistry::new();
        assert!(!registry.register("#"));
        assert!(!registry.register(""));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_refreshes_last_used() {
        let mut registry = TagRegistry::new();
        registry.register_at("#work", at(100));
        registry.register_at("#work", at(200));

        let entry = registry.get("work").unwrap();
        assert_eq!(entry.count, 2);
        assert_eq!(entry.last_used, at(200));
    }

    #[test]
    fn test_all_tags_sorted_by_count_descending() {
        let mut registry = TagRegistry::new();
        registry.register("#rare");
        for _ in 0..3 {
            registry.register("#common");
        }
        for _ in 0..2 {
            registry.register("#middling");
        }

        let ids: Vec<&str> = registry.all_tags().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["common", "middling", "rare"]);
    }

    #[test]
    fn test_all_tags_ties_break_on_id() {
        let mut registry = TagRegistry::new();
        registry.register("#beta");
        registry.register("#alpha");

        let ids: Vec<&str> = registry.all_tags().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_tags_in_namespace_case_insensitive() {
        let mut registry = TagRegistry::new();
        registry.register("#priority/high");
        registry.register("#priority/low");
        registry.register("#status/open");

        let ids: Vec<&str> = registry
            .tags_in_namespace("PRIORITY")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["priority/high", "priority/low"]);
    }

    #[test]
    fn test_unknown_namespace_returns_empty() {
        let registry = TagRegistry::new();
        assert!(registry.tags_in_namespace("nowhere").is_empty());
    }

    #[test]
    fn test_popular_tags_truncates() {
        let mut registry = TagRegistry::new();
        for i in 0..15 {
            registry.register(&format!("#tag{}", i));
        }
        assert_eq!(registry.popular_tags(10).len(), 10);
    }

    #[test]
    fn test_entries_round_trip_preserves_counts() {
        let mut registry = TagRegistry::new();
        registry.register("#work");
        registry.register("#work");
        registry.register("#priority/high");

        let restored = TagRegistry::from_entries(registry.into_entries());
        assert_eq!(restored.get("work").unwrap().count, 2);
        assert_eq!(restored.get("priority/high").unwrap().count, 1);
    }
}
