use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{GitError, ObjectId, ObjectType, Result};
use crate::repository::Repository;

/// Implements the `hash-object` command functionality
pub struct HashObjectCommand {
    /// File to hash
    file: PathBuf,
    /// Whether to write the blob into the store (`-w`)
    write: bool,
    /// Repository path
    path: PathBuf,
}

impl HashObjectCommand {
    /// Create a new hash-object command
    pub fn new(file: &Path, write: bool, path: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            write,
            path: path.to_path_buf(),
        }
    }

    /// Execute the hash-object command
    pub fn execute(&self) -> Result<()> {
        if !self.file.is_file() {
            return Err(GitError::FileMissing(self.file.display().to_string()));
        }
        let bytes = fs::read(&self.file)?;

        let id = if self.write {
            let repo = Repository::open(&self.path)?;
            repo.store().put(ObjectType::Blob, &bytes)?
        } else {
            ObjectId::compute(ObjectType::Blob, &bytes)
        };

        println!("{}", id);
        Ok(())
    }
}
