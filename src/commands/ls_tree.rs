use std::path::{Path, PathBuf};

use crate::core::{GitError, ObjectType, Result, Tree};
use crate::repository::Repository;

/// Implements the `ls-tree` command functionality
pub struct LsTreeCommand {
    /// Digest of the tree to list
    digest: String,
    /// Repository path
    path: PathBuf,
}

impl LsTreeCommand {
    /// Create a new ls-tree command
    pub fn new(digest: &str, path: &Path) -> Self {
        Self {
            digest: digest.to_string(),
            path: path.to_path_buf(),
        }
    }

    /// Execute the ls-tree command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;
        let (kind, payload) = repo.store().get_by_hex(&self.digest)?;

        if kind != ObjectType::Tree {
            return Err(GitError::MalformedObject(format!(
                "expected 'tree' object but found '{}'",
                kind.as_str()
            )));
        }

        let tree = Tree::parse(&payload)?;
        for entry in tree.entries() {
            println!("{} {}\t{}", entry.mode.as_str(), entry.id, entry.name);
        }
        Ok(())
    }
}
