//! Configuration management

use crate::error::{Result, YearcodeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hidden directory holding the project config
pub const CONFIG_DIR: &str = ".yearcode";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Forced tag; when unset the resolved candidate is kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Tags already claimed by other shortcodes
    #[serde(default)]
    pub registered: Vec<String>,
}

impl Config {
    /// Load config from .yearcode/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                YearcodeError::NotYearcodeDirectory(path.to_path_buf())
            } else {
                YearcodeError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .yearcode/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Whether another shortcode already claims `tag`
    pub fn is_registered(&self, tag: &str) -> bool {
        self.registered.iter().any(|t| t == tag)
    }

    /// Override hook: the configured tag, or the candidate unchanged
    pub fn override_tag(&self, candidate: String) -> String {
        match &self.tag {
            Some(tag) => tag.clone(),
            None => candidate,
        }
    }

    /// Parse a comma-separated tag list, dropping blanks and duplicates
    pub fn parse_tag_list(value: &str) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }
}
