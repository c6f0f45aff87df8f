//! Config management use case

use crate::error::{Result, TagmarkError};
use crate::infrastructure::{Config, FileSystemRepository, PortalRepository};

/// Service for managing store configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "suggestion_limit" => Ok(config.suggestion_limit.to_string()),
            "popular_limit" => Ok(config.popular_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagmarkError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: suggestion_limit, popular_limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "suggestion_limit" => {
                config.suggestion_limit = parse_limit(key, value)?;
            }
            "popular_limit" => {
                config.popular_limit = parse_limit(key, value)?;
            }
            "created" => {
                return Err(TagmarkError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TagmarkError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: suggestion_limit, popular_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize> {
    let limit: usize = value
        .parse()
        .map_err(|_| TagmarkError::Config(format!("Invalid value for {}: '{}'", key, value)))?;
    if limit == 0 {
        return Err(TagmarkError::Config(format!(
            "{} must be at least 1",
            key
        )));
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_and_set_limits() {
        let (_temp, service) = service();

        assert_eq!(service.get("popular_limit").unwrap(), "10");
        service.set("popular_limit", "20").unwrap();
        assert_eq!(service.get("popular_limit").unwrap(), "20");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.set("created", "now").is_err());
        assert!(service.get("created").is_ok());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let (_temp, service) = service();
        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "daily").is_err());
    }

    #[test]
    fn test_invalid_limit_values_are_rejected() {
        let (_temp, service) = service();
        assert!(service.set("suggestion_limit", "abc").is_err());
        assert!(service.set("suggestion_limit", "0").is_err());
    }
}
