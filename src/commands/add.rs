use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::repository::Repository;

/// Implements the `add` command functionality
pub struct AddCommand {
    /// Path to stage, or `.` for every file under the root
    pathspec: String,
    /// Repository path
    path: PathBuf,
}

impl AddCommand {
    /// Create a new add command
    pub fn new(pathspec: &str, path: &Path) -> Self {
        Self {
            pathspec: pathspec.to_string(),
            path: path.to_path_buf(),
        }
    }

    /// Execute the add command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;
        let staged = repo.add(&self.pathspec)?;
        println!("Staged {} file(s) for commit", staged);
        Ok(())
    }
}
