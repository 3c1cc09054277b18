//! Error types for yearcode

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for yearcode
#[derive(Debug, Error)]
pub enum YearcodeError {
    #[error("Not a yearcode directory: {0}")]
    NotYearcodeDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl YearcodeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            YearcodeError::NotYearcodeDirectory(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            YearcodeError::NotYearcodeDirectory(path) => {
                format!(
                    "Not a yearcode directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'yearcode init' in this directory to create a config\n\
                    • Navigate to an existing yearcode directory\n\
                    • Set YEARCODE_ROOT environment variable to your project path",
                    path.display()
                )
            }
            YearcodeError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: yearcode config tag copyright_year",
                        msg
                    )
                } else if msg.contains("--write") {
                    format!(
                        "{}\n\n\
                        Example: yearcode render site/ --write",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            YearcodeError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse .yearcode/config.toml: {}\n\n\
                    Valid keys: tag (string), registered (list of strings)\n\
                    Example: registered = [\"year\"]",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using YearcodeError
pub type Result<T> = std::result::Result<T, YearcodeError>;
