//! File system repository

use crate::error::{Result, TagmarkError};
use crate::infrastructure::{Config, RegistryState};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Abstract repository for portal store operations
pub trait PortalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagmark/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagmark/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Load the whole registry state from .tagmark/registry.toml
    fn load_state(&self) -> Result<RegistryState>;

    /// Save the whole registry state to .tagmark/registry.toml
    fn save_state(&self, state: &RegistryState) -> Result<()>;

    /// Check if .tagmark directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagmark directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of PortalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover store root by walking up from current directory
    /// First checks TAGMARK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check TAGMARK_ROOT environment variable first
        if let Ok(root_path) = std::env::var("TAGMARK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tagmark_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagmarkError::Config(format!(
                    "TAGMARK_ROOT is set to '{}' but no .tagmark directory found. \
                    Run 'tagmark init' in that directory or unset TAGMARK_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tagmark_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .tagmark
                    return Err(TagmarkError::NotTagmarkDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .tagmark directory
    fn has_tagmark_dir(path: &Path) -> bool {
        path.join(".tagmark").is_dir()
    }

    /// List document files (.md, .txt) under the given directory,
    /// skipping hidden entries such as the .tagmark store itself.
    pub fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();

        let walker = WalkDir::new(dir).into_iter();
        for entry in walker.filter_entry(|e| !is_hidden(e)) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && has_document_extension(entry.path()) {
                documents.push(entry.path().to_path_buf());
            }
        }

        documents.sort();
        Ok(documents)
    }

    /// Key a document path for fingerprint bookkeeping: relative to the
    /// store root where possible, so keys survive store relocation.
    pub fn document_key(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn has_document_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md") | Some("txt")
    )
}

impl PortalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn load_state(&self) -> Result<RegistryState> {
        RegistryState::load_from_dir(&self.root)
    }

    fn save_state(&self, state: &RegistryState) -> Result<()> {
        state.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tagmark_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tagmark_dir = self.root.join(".tagmark");
        if !tagmark_dir.exists() {
            fs::create_dir_all(&tagmark_dir)?;
        }
        Ok(())
    }
}
