//! List tags use case

use crate::domain::tags::{TagEntry, TagRegistry};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PortalRepository};

/// Service for listing registered tags.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// List tags most used first. `namespace` filters case-insensitively;
    /// `limit` truncates to the top N.
    pub fn execute(
        &self,
        namespace: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<TagEntry>> {
        let state = self.repository.load_state()?;
        let registry = TagRegistry::from_entries(state.tags);

        let tags = match namespace {
            Some(ns) => registry.tags_in_namespace(ns),
            None => registry.all_tags(),
        };

        let mut tags: Vec<TagEntry> = tags.into_iter().cloned().collect();
        if let Some(limit) = limit {
            tags.truncate(limit);
        }
        Ok(tags)
    }
}
