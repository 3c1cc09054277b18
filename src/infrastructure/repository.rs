//! File system repository

use crate::error::{Result, YearcodeError};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for project configuration
pub trait ProjectRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .yearcode/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .yearcode/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .yearcode directory exists
    fn is_initialized(&self) -> bool;

    /// Create .yearcode directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover project root by walking up from current directory
    /// First checks YEARCODE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("YEARCODE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(YearcodeError::Config(format!(
                    "YEARCODE_ROOT is set to '{}' but no .yearcode directory found. \
                    Run 'yearcode init' in that directory or unset YEARCODE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover project root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(YearcodeError::NotYearcodeDirectory(start.to_path_buf())),
            }
        }
    }

    /// Load the discovered project config, or the defaults when there is none
    pub fn discover_config() -> Result<Config> {
        match Self::discover() {
            Ok(repo) => {
                tracing::debug!(root = %repo.root.display(), "using project config");
                repo.load_config()
            }
            Err(YearcodeError::NotYearcodeDirectory(_)) => {
                tracing::debug!("no project config found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Check if a path contains a .yearcode directory
    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl ProjectRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(YearcodeError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }
}

/// Collect files under `dir` whose extension is in `extensions`, sorted.
///
/// Hidden directories (such as .yearcode or .git) are skipped.
pub fn collect_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !entry
                .file_name()
                .to_str()
                .map(|name| name.starts_with('.'))
                .unwrap_or(false)
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            YearcodeError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to walk {}: {}", dir.display(), e),
            ))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false);

        if matches {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
