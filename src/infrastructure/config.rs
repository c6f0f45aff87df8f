//! Configuration management

use crate::domain::tags::{DEFAULT_POPULAR_LIMIT, DEFAULT_SUGGESTION_LIMIT};
use crate::error::{Result, TagmarkError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub suggestion_limit: usize,
    pub popular_limit: usize,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            popular_limit: DEFAULT_POPULAR_LIMIT,
            created: Utc::now(),
        }
    }

    /// Load config from .tagmark/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagmark").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagmarkError::NotTagmarkDirectory(path.to_path_buf())
            } else {
                TagmarkError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagmarkError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagmark/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tagmark_dir = path.join(".tagmark");
        let config_path = tagmark_dir.join("config.toml");

        // Ensure .tagmark directory exists
        if !tagmark_dir.exists() {
            fs::create_dir(&tagmark_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagmarkError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
