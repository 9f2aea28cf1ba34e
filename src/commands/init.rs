use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::repository::Repository;

/// Implements the `init` command functionality
pub struct InitCommand {
    /// Path where to initialize the repository
    path: PathBuf,
}

impl InitCommand {
    /// Create a new init command
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Execute the init command
    pub fn execute(&self) -> Result<()> {
        println!("Initializing demogit in {}", self.path.display());
        Repository::init(&self.path)?;
        println!("demogit initialized.");
        Ok(())
    }
}
