//! Initialize project use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};
use std::fs;
use std::path::Path;

/// Initialize a new yearcode project at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    println!("Initialized yearcode project at {}", path.display());

    Ok(())
}
