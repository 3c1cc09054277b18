//! Config management use case

use crate::error::{Result, YearcodeError};
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};

/// Service for managing project configuration
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
            "tag" => Ok(config.tag.unwrap_or_default()),
            "registered" => Ok(config.registered.join(",")),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "tag" => config.tag = Some(value.to_string()),
            "registered" => config.registered = Config::parse_tag_list(value),
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// Reset a config value to its default
    pub fn unset(&self, key: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "tag" => config.tag = None,
            "registered" => config.registered.clear(),
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> YearcodeError {
    YearcodeError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: tag, registered",
        key
    ))
}
