//! Registry persistence
//!
//! The registry is persisted whole: one TOML file holding every tag entry
//! plus the content fingerprints of documents whose hashtags are already
//! counted. Reads and writes always move the entire state.

use crate::domain::tags::TagEntry;
use crate::error::{Result, TagmarkError};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// On-disk form of the registry.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegistryState {
    /// All tag entries, sorted by id when written.
    #[serde(default)]
    pub tags: Vec<TagEntry>,

    /// Document key -> content fingerprint at last registration. Re-rendering
    /// unchanged content must not re-register its tags.
    #[serde(default)]
    pub documents: HashMap<String, String>,
}

impl RegistryState {
    /// Load registry state from .tagmark/registry.toml in the given
    /// directory. A store with no registry file yet is an empty state.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let state_path = path.join(".tagmark").join("registry.toml");

        let contents = match fs::read_to_string(&state_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RegistryState::default())
            }
            Err(e) => return Err(TagmarkError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| TagmarkError::Registry(format!("Failed to parse registry.toml: {}", e)))
    }

    /// Save registry state to .tagmark/registry.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tagmark_dir = path.join(".tagmark");
        let state_path = tagmark_dir.join("registry.toml");

        if !tagmark_dir.exists() {
            fs::create_dir(&tagmark_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagmarkError::Registry(format!("Failed to serialize registry: {}", e)))?;

        fs::write(&state_path, contents)?;

        Ok(())
    }
}

/// Stable fingerprint of a document's content.
///
/// Registration side effects are keyed off content identity, not render
/// count: a document whose fingerprint is unchanged since the last
/// registration contributes nothing new.
pub fn content_fingerprint(content: &str) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
