use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::repository::Repository;

/// Implements the `write-tree` command functionality
pub struct WriteTreeCommand {
    /// Directory to snapshot, relative to the repository root
    dir: PathBuf,
    /// Repository path
    path: PathBuf,
}

impl WriteTreeCommand {
    /// Create a new write-tree command
    pub fn new(dir: &Path, path: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            path: path.to_path_buf(),
        }
    }

    /// Execute the write-tree command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;
        let target = if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            repo.root().join(&self.dir)
        };

        let id = repo.tree_builder()?.from_directory(&target)?;
        println!("Tree written successfully: {}", id);
        Ok(())
    }
}
