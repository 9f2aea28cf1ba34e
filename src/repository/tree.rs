use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{EntryMode, GitError, ObjectId, ObjectType, Result, Tree, TreeEntry};
use crate::repository::{IgnoreList, Index, ObjectStore};
use crate::utils::rel_path_string;

/// Directory recursion bound; guards against symlink cycles
pub const MAX_TREE_DEPTH: usize = 25;

/// Builds tree objects, either from a directory subtree or from the
/// staging index, writing blobs and trees through the object store.
pub struct TreeBuilder<'a> {
    store: &'a ObjectStore,
    ignore: IgnoreList,
    skip: Vec<PathBuf>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(store: &'a ObjectStore, ignore: IgnoreList) -> Self {
        Self {
            store,
            ignore,
            skip: Vec::new(),
        }
    }

    /// Exclude exact paths (the store directory, the index file) from
    /// directory walks.
    pub fn skip_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.skip = paths;
        self
    }

    /// Recursively snapshot a directory: files become `100644` blob
    /// entries, subdirectories recurse as `040000` subtrees.
    pub fn from_directory(&self, dir: &Path) -> Result<ObjectId> {
        self.walk(dir, dir, 0)
    }

    fn walk(&self, root: &Path, dir: &Path, depth: usize) -> Result<ObjectId> {
        if depth > MAX_TREE_DEPTH {
            return Err(GitError::MaxDepthExceeded(MAX_TREE_DEPTH));
        }

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(dir)? {
            let path = dir_entry?.path();
            if self.skip.iter().any(|skipped| skipped == &path) {
                continue;
            }
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            let rel = rel_path_string(path.strip_prefix(root).unwrap_or(&path));
            if self.ignore.is_ignored(&rel) {
                continue;
            }

            if path.is_dir() {
                let id = self.walk(root, &path, depth + 1)?;
                entries.push(TreeEntry {
                    mode: EntryMode::Directory,
                    name,
                    id,
                });
            } else {
                let bytes = fs::read(&path)?;
                let id = self.store.put(ObjectType::Blob, &bytes)?;
                entries.push(TreeEntry {
                    mode: EntryMode::File,
                    name,
                    id,
                });
            }
        }

        let tree = Tree::new(entries);
        self.store.put(ObjectType::Tree, &tree.serialize())
    }

    /// Build a flat tree from the staging index: every staged entry is a
    /// `100644` sibling keyed by its stored relative path.
    pub fn from_index(&self, index: &Index) -> Result<ObjectId> {
        if index.is_empty() {
            return Err(GitError::NothingToCommit);
        }

        let entries = index
            .entries()
            .iter()
            .map(|entry| TreeEntry {
                mode: EntryMode::File,
                name: entry.path.clone(),
                id: entry.id.clone(),
            })
            .collect();

        let tree = Tree::new(entries);
        self.store.put(ObjectType::Tree, &tree.serialize())
    }
}
