use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::repository::Repository;

/// Implements the `remove` command functionality
pub struct RemoveCommand {
    /// Repository path
    path: PathBuf,
}

impl RemoveCommand {
    /// Create a new remove command
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Execute the remove command, deleting the store and staging file
    pub fn execute(&self) -> Result<()> {
        println!("Removing demogit...");
        Repository::remove(&self.path)?;
        println!("demogit removed.");
        Ok(())
    }
}
