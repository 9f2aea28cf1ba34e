use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::repository::Repository;

/// Implements the `unstage-all` command functionality
pub struct UnstageCommand {
    /// Repository path
    path: PathBuf,
}

impl UnstageCommand {
    /// Create a new unstage-all command
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Execute the unstage-all command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;
        repo.unstage_all()?;
        println!("Staging area cleared");
        Ok(())
    }
}
