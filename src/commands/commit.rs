use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::repository::Repository;

/// Implements the `commit` command functionality
pub struct CommitCommand {
    /// Commit message
    message: String,
    /// Repository path
    path: PathBuf,
}

impl CommitCommand {
    /// Create a new commit command
    pub fn new(message: &str, path: &Path) -> Self {
        Self {
            message: message.to_string(),
            path: path.to_path_buf(),
        }
    }

    /// Execute the commit command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;
        let (id, branch) = repo.commit(&self.message)?;
        let short = branch.rsplit('/').next().unwrap_or(&branch);
        println!("Created commit {} on {}", id, short);
        Ok(())
    }
}
