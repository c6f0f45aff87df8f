//! Error types for tagmark

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagmark application
///
/// The tokenizer and the registry core never fail; errors only arise at the
/// store/CLI boundary (missing store, unreadable files, bad configuration).
#[derive(Debug, Error)]
pub enum TagmarkError {
    #[error("Not a tagmark directory: {0}")]
    NotTagmarkDirectory(PathBuf),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagmarkError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagmarkError::NotTagmarkDirectory(_) => 2,
            TagmarkError::Registry(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagmarkError::NotTagmarkDirectory(path) => {
                format!(
                    "Not a tagmark directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagmark init' in this directory to create a tag store\n\
                    • Navigate to an existing tagmark directory\n\
                    • Set TAGMARK_ROOT environment variable to your store path",
                    path.display()
                )
            }
            TagmarkError::Registry(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • The registry file may have been edited by hand\n\
                    • Remove .tagmark/registry.toml and re-run 'tagmark scan' to rebuild it",
                    msg
                )
            }
            TagmarkError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: suggestion_limit, popular_limit, created\n\
                        Example: tagmark config popular_limit 20",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagmarkError
pub type Result<T> = std::result::Result<T, TagmarkError>;
