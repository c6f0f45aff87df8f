//! Suggest tags use case

use crate::domain::tags::{suggest, TagEntry, TagRegistry};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PortalRepository};

/// Service for autocomplete suggestions while typing a hashtag.
pub struct SuggestTagsService {
    repository: FileSystemRepository,
}

impl SuggestTagsService {
    /// Create a new suggest service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Rank completions for a partially typed term, honoring the configured
    /// suggestion limit.
    pub fn execute(&self, term: &str) -> Result<Vec<TagEntry>> {
        let config = self.repository.load_config()?;
        let state = self.repository.load_state()?;
        let registry = TagRegistry::from_entries(state.tags);

        Ok(suggest(&registry, term, config.suggestion_limit)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::infrastructure::RegistryState;
    use tempfile::TempDir;

    #[test]
    fn test_execute_applies_configured_limit() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let mut registry = TagRegistry::new();
        for i in 0..8 {
            registry.register(&format!("#task/t{}", i));
        }
        repo.save_state(&RegistryState {
            tags: registry.into_entries(),
            documents: Default::default(),
        })
        .unwrap();

        let suggestions = SuggestTagsService::new(repo).execute("task").unwrap();
        assert_eq!(suggestions.len(), 5);
    }
}
