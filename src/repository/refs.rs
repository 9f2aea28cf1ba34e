use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::{GitError, ObjectId, Result};

/// Storage for branch references and the HEAD pointer.
///
/// A ref is a file under the store directory holding one digest; HEAD is a
/// symbolic pointer of the form `ref: refs/heads/<branch>`.
pub struct RefStore {
    store_dir: PathBuf,
}

impl RefStore {
    pub fn new(store_dir: &Path) -> Self {
        Self {
            store_dir: store_dir.to_path_buf(),
        }
    }

    /// Read the raw HEAD content
    pub fn head(&self) -> Result<String> {
        let head_path = self.store_dir.join("HEAD");
        if !head_path.exists() {
            return Err(GitError::NotARepository(self.store_dir.clone()));
        }
        Ok(fs::read_to_string(head_path)?.trim().to_string())
    }

    /// Point HEAD at a branch ref
    pub fn set_head(&self, branch: &str) -> Result<()> {
        fs::write(self.store_dir.join("HEAD"), format!("ref: {}\n", branch))?;
        Ok(())
    }

    /// The branch HEAD points at (`refs/heads/<b>`), or the raw HEAD
    /// content when it holds a digest directly (detached state).
    pub fn current_branch(&self) -> Result<String> {
        let head = self.head()?;
        match head.strip_prefix("ref: ") {
            Some(branch) => Ok(branch.to_string()),
            None => Ok(head),
        }
    }

    /// Read a ref's digest; `None` when the ref file does not exist yet
    pub fn read(&self, name: &str) -> Result<Option<ObjectId>> {
        let ref_path = self.store_dir.join(name);
        if !ref_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&ref_path)?.trim().to_string();
        Ok(Some(ObjectId::from_str(&content)?))
    }

    /// Write a ref, creating parent directories as needed
    pub fn update(&self, name: &str, id: &ObjectId) -> Result<()> {
        let ref_path = self.store_dir.join(name);
        if let Some(parent) = ref_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&ref_path, format!("{}\n", id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ObjectType;
    use assert_fs::TempDir;

    #[test]
    fn head_round_trip() {
        let dir = TempDir::new().unwrap();
        let refs = RefStore::new(dir.path());
        refs.set_head("refs/heads/main").unwrap();
        assert_eq!(refs.head().unwrap(), "ref: refs/heads/main");
        assert_eq!(refs.current_branch().unwrap(), "refs/heads/main");
    }

    #[test]
    fn detached_head_returns_raw_content() {
        let dir = TempDir::new().unwrap();
        let refs = RefStore::new(dir.path());
        let id = ObjectId::compute(ObjectType::Blob, b"detached");
        fs::write(dir.path().join("HEAD"), format!("{}\n", id)).unwrap();
        assert_eq!(refs.current_branch().unwrap(), id.to_hex());
    }

    #[test]
    fn missing_ref_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let refs = RefStore::new(dir.path());
        assert!(refs.read("refs/heads/main").unwrap().is_none());
    }

    #[test]
    fn update_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let refs = RefStore::new(dir.path());
        let id = ObjectId::compute(ObjectType::Blob, b"tip");
        refs.update("refs/heads/main", &id).unwrap();
        assert_eq!(refs.read("refs/heads/main").unwrap(), Some(id));
    }

    #[test]
    fn missing_head_means_no_repository() {
        let dir = TempDir::new().unwrap();
        let refs = RefStore::new(dir.path());
        assert!(matches!(refs.head(), Err(GitError::NotARepository(_))));
    }
}
