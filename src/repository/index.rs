use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::{ObjectId, Result};

/// One staged `(digest, relative-path)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: ObjectId,
    pub path: String,
}

/// The staging area: an ordered list of entries that will form the next
/// commit's tree, persisted one `<digest> <path>` line per entry.
pub struct Index {
    file: PathBuf,
    entries: Vec<IndexEntry>,
}

impl Index {
    /// Load the index file; a missing file loads as an empty index
    pub fn load(file: &Path) -> Result<Self> {
        let mut entries = Vec::new();
        if file.exists() {
            for line in fs::read_to_string(file)?.lines() {
                let mut parts = line.splitn(2, ' ');
                let (digest, path) = match (parts.next(), parts.next()) {
                    (Some(digest), Some(path)) => (digest, path),
                    _ => continue,
                };
                entries.push(IndexEntry {
                    id: ObjectId::from_str(digest)?,
                    path: path.to_string(),
                });
            }
        }
        Ok(Self {
            file: file.to_path_buf(),
            entries,
        })
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether some entry stages the given path
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    /// Append an entry unless the exact `(digest, path)` pair is present.
    /// Returns whether the entry was added.
    pub fn stage(&mut self, id: ObjectId, path: &str) -> bool {
        let duplicate = self
            .entries
            .iter()
            .any(|e| e.id == id && e.path == path);
        if duplicate {
            return false;
        }
        self.entries.push(IndexEntry {
            id,
            path: path.to_string(),
        });
        true
    }

    /// Drop every entry. A no-op when the index is already empty.
    pub fn unstage_all(&mut self) {
        self.entries.clear();
    }

    /// Persist the entry list, overwriting the prior file in full
    pub fn save(&self) -> Result<()> {
        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(&format!("{} {}\n", entry.id, entry.path));
        }
        fs::write(&self.file, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ObjectType;
    use assert_fs::TempDir;

    fn blob_id(content: &[u8]) -> ObjectId {
        ObjectId::compute(ObjectType::Blob, content)
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let index = Index::load(&dir.path().join("index")).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn stage_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("index");

        let mut index = Index::load(&file).unwrap();
        assert!(index.stage(blob_id(b"one"), "a.txt"));
        assert!(index.stage(blob_id(b"two"), "sub/b.txt"));
        index.save().unwrap();

        let reloaded = Index::load(&file).unwrap();
        assert_eq!(reloaded.entries().len(), 2);
        assert_eq!(reloaded.entries()[0].path, "a.txt");
        assert_eq!(reloaded.entries()[1].id, blob_id(b"two"));
    }

    #[test]
    fn duplicate_pairs_are_suppressed() {
        let dir = TempDir::new().unwrap();
        let mut index = Index::load(&dir.path().join("index")).unwrap();
        assert!(index.stage(blob_id(b"one"), "a.txt"));
        assert!(!index.stage(blob_id(b"one"), "a.txt"));
        // Same path with new content is a fresh entry
        assert!(index.stage(blob_id(b"changed"), "a.txt"));
        assert_eq!(index.entries().len(), 2);
    }

    #[test]
    fn unstage_all_clears_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("index");

        let mut index = Index::load(&file).unwrap();
        index.stage(blob_id(b"one"), "a.txt");
        index.unstage_all();
        index.save().unwrap();
        assert!(Index::load(&file).unwrap().is_empty());

        // Already empty: clearing again is not an error
        index.unstage_all();
        index.save().unwrap();
        assert!(Index::load(&file).unwrap().is_empty());
    }

    #[test]
    fn save_rewrites_the_whole_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("index");

        let mut index = Index::load(&file).unwrap();
        index.stage(blob_id(b"one"), "a.txt");
        index.stage(blob_id(b"two"), "b.txt");
        index.save().unwrap();

        let mut index = Index::load(&file).unwrap();
        index.unstage_all();
        index.stage(blob_id(b"three"), "c.txt");
        index.save().unwrap();

        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("c.txt"));
    }
}
