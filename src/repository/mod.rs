mod commit;
mod ignore;
mod index;
mod refs;
mod status;
mod storage;
mod tree;

use std::fs;
use std::path::{Path, PathBuf};

pub use commit::{Commit, Signature};
pub use ignore::IgnoreList;
pub use index::{Index, IndexEntry};
pub use refs::RefStore;
pub use status::StatusReport;
pub use storage::ObjectStore;
pub use tree::{TreeBuilder, MAX_TREE_DEPTH};

use crate::core::{GitError, ObjectId, ObjectType, RepoConfig, Result};
use crate::utils::rel_path_string;

/// Name of the store directory under the repository root
pub const STORE_DIR: &str = "demogit-store";
/// Name of the staging file under the repository root
pub const INDEX_FILE: &str = "index";
/// Name of the ignore-rules file under the repository root
pub const IGNORE_FILE: &str = ".demogitignore";
/// Branch HEAD points at after `init`
pub const DEFAULT_BRANCH: &str = "refs/heads/main";

/// Pathspec that stages every regular file under the repository root
pub const ADD_ALL: &str = ".";

/// One blob reachable from the current commit's tree, in the form the
/// remote-sync collaborator uploads.
pub struct ExportEntry {
    pub path: String,
    pub id: ObjectId,
    pub bytes: Vec<u8>,
}

/// A repository rooted at an explicit directory.
///
/// Owns the on-disk resources: the object store and refs under
/// `demogit-store/`, and the staging file at the root.
pub struct Repository {
    root: PathBuf,
    store_dir: PathBuf,
    store: ObjectStore,
    refs: RefStore,
    config: RepoConfig,
}

impl Repository {
    /// Initialize the repository directory structure
    pub fn init(root: &Path) -> Result<Self> {
        let store_dir = root.join(STORE_DIR);

        for dir in ["objects", "refs"] {
            fs::create_dir_all(store_dir.join(dir))?;
        }
        fs::write(store_dir.join("HEAD"), format!("ref: {}\n", DEFAULT_BRANCH))?;
        fs::write(root.join(INDEX_FILE), "")?;

        let config_path = store_dir.join("config.toml");
        let config = RepoConfig::default();
        if !config_path.exists() {
            config.save(&config_path)?;
        }

        Ok(Self {
            root: root.to_path_buf(),
            store: ObjectStore::new(&store_dir),
            refs: RefStore::new(&store_dir),
            store_dir,
            config,
        })
    }

    /// Open an existing repository; fails when the store is absent
    pub fn open(root: &Path) -> Result<Self> {
        let store_dir = root.join(STORE_DIR);
        if !store_dir.is_dir() {
            return Err(GitError::NotARepository(root.to_path_buf()));
        }

        let config = RepoConfig::load(&store_dir.join("config.toml"))?;

        Ok(Self {
            root: root.to_path_buf(),
            store: ObjectStore::new(&store_dir),
            refs: RefStore::new(&store_dir),
            store_dir,
            config,
        })
    }

    /// Tear down the repository: store directory and staging file
    pub fn remove(root: &Path) -> Result<()> {
        let store_dir = root.join(STORE_DIR);
        if !store_dir.is_dir() {
            return Err(GitError::NotARepository(root.to_path_buf()));
        }
        fs::remove_dir_all(&store_dir)?;

        let index_file = root.join(INDEX_FILE);
        if index_file.exists() {
            fs::remove_file(index_file)?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// Load the staging index
    pub fn index(&self) -> Result<Index> {
        Index::load(&self.root.join(INDEX_FILE))
    }

    /// Load the ignore rules
    pub fn ignore(&self) -> Result<IgnoreList> {
        IgnoreList::load(&self.root.join(IGNORE_FILE))
    }

    /// A tree builder wired to this repository's store, with the store
    /// directory and staging file excluded from directory walks.
    pub fn tree_builder(&self) -> Result<TreeBuilder<'_>> {
        Ok(TreeBuilder::new(&self.store, self.ignore()?)
            .skip_paths(vec![self.store_dir.clone(), self.root.join(INDEX_FILE)]))
    }

    /// The branch HEAD points at
    pub fn current_branch(&self) -> Result<String> {
        self.refs.current_branch()
    }

    /// The current branch's last commit, or `None` before the first one
    pub fn last_commit(&self) -> Result<Option<ObjectId>> {
        let branch = self.refs.current_branch()?;
        self.refs.read(&branch)
    }

    /// Stage a single path, or every regular file under the root for the
    /// `.` sentinel. Returns how many entries were appended.
    pub fn add(&self, pathspec: &str) -> Result<usize> {
        let ignore = self.ignore()?;
        let mut index = self.index()?;
        let mut staged = 0;

        if pathspec == ADD_ALL {
            for rel in self.working_files(&ignore)? {
                staged += self.stage_file(&mut index, &rel)?;
            }
        } else {
            let rel = rel_path_string(Path::new(pathspec));
            if !ignore.is_ignored(&rel) {
                staged += self.stage_file(&mut index, &rel)?;
            }
        }

        index.save()?;
        Ok(staged)
    }

    /// Blob a working file into the store and stage it. A missing file
    /// warns and is skipped rather than aborting the surrounding add.
    fn stage_file(&self, index: &mut Index, rel: &str) -> Result<usize> {
        let path = self.root.join(rel);
        if !path.is_file() {
            eprintln!("warning: {}", GitError::FileMissing(rel.to_string()));
            return Ok(0);
        }
        let bytes = fs::read(&path)?;
        let id = self.store.put(ObjectType::Blob, &bytes)?;
        Ok(if index.stage(id, rel) { 1 } else { 0 })
    }

    /// Replace the index content with an empty list
    pub fn unstage_all(&self) -> Result<()> {
        let mut index = self.index()?;
        index.unstage_all();
        index.save()
    }

    /// Record the staged entries as a commit on the current branch.
    /// Returns the new digest and the branch it moved.
    pub fn commit(&self, message: &str) -> Result<(ObjectId, String)> {
        if message.trim().is_empty() {
            return Err(GitError::EmptyMessage);
        }

        let index = self.index()?;
        let tree = self.tree_builder()?.from_index(&index)?;

        let branch = self.refs.current_branch()?;
        let parent = self.refs.read(&branch)?;

        let signature = Signature::now(&self.config.user.name, &self.config.user.email);
        let commit = Commit::new(
            tree,
            parent,
            signature.clone(),
            signature,
            message.to_string(),
        );

        let id = self
            .store
            .put(ObjectType::Commit, commit.format().as_bytes())?;
        self.refs.update(&branch, &id)?;

        Ok((id, branch))
    }

    /// Classify every path as staged, unstaged or untracked
    pub fn status(&self) -> Result<StatusReport> {
        let ignore = self.ignore()?;
        let index = self.index()?;
        let files = self.working_files(&ignore)?;
        Ok(status::collect(
            &index,
            &ignore,
            &files,
            self.store.objects_dir(),
        ))
    }

    /// Every `(path, digest, bytes)` reachable from the current commit's
    /// tree; empty before the first commit.
    pub fn export_head(&self) -> Result<Vec<ExportEntry>> {
        let head = match self.last_commit()? {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        let (kind, payload) = self.store.get(&head)?;
        if kind != ObjectType::Commit {
            return Err(GitError::MalformedObject(format!(
                "{} is a {}, expected a commit",
                head,
                kind.as_str()
            )));
        }
        let commit = Commit::parse(&payload)?;

        let mut out = Vec::new();
        self.collect_blobs(&commit.tree, "", &mut out)?;
        Ok(out)
    }

    fn collect_blobs(&self, tree_id: &ObjectId, prefix: &str, out: &mut Vec<ExportEntry>) -> Result<()> {
        let (kind, payload) = self.store.get(tree_id)?;
        if kind != ObjectType::Tree {
            return Err(GitError::MalformedObject(format!(
                "{} is a {}, expected a tree",
                tree_id,
                kind.as_str()
            )));
        }

        for entry in crate::core::Tree::parse(&payload)?.entries() {
            let path = if prefix.is_empty() {
                entry.name.clone()
            } else {
                format!("{}/{}", prefix, entry.name)
            };
            match entry.mode {
                crate::core::EntryMode::Directory => {
                    self.collect_blobs(&entry.id, &path, out)?;
                }
                crate::core::EntryMode::File => {
                    let (blob_kind, bytes) = self.store.get(&entry.id)?;
                    if blob_kind != ObjectType::Blob {
                        return Err(GitError::MalformedObject(format!(
                            "{} is a {}, expected a blob",
                            entry.id,
                            blob_kind.as_str()
                        )));
                    }
                    out.push(ExportEntry {
                        path,
                        id: entry.id.clone(),
                        bytes,
                    });
                }
            }
        }
        Ok(())
    }

    /// Ingest one fetched file: write it into the working tree, store its
    /// blob, and stage it.
    pub fn materialize(&self, rel: &str, bytes: &[u8]) -> Result<ObjectId> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;

        let id = self.store.put(ObjectType::Blob, bytes)?;
        let mut index = self.index()?;
        index.stage(id.clone(), rel);
        index.save()?;
        Ok(id)
    }

    /// Enumerate every non-ignored regular file under the root, sorted,
    /// as forward-slash relative paths. The store directory and the
    /// staging file are never listed.
    fn working_files(&self, ignore: &IgnoreList) -> Result<Vec<String>> {
        let mut files = Vec::new();
        self.visit(&self.root, ignore, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn visit(&self, dir: &Path, ignore: &IgnoreList, out: &mut Vec<String>) -> Result<()> {
        let index_file = self.root.join(INDEX_FILE);
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path == self.store_dir || path == index_file {
                continue;
            }
            let rel = rel_path_string(path.strip_prefix(&self.root).unwrap_or(&path));
            if ignore.is_ignored(&rel) {
                continue;
            }
            if path.is_dir() {
                self.visit(&path, ignore, out)?;
            } else {
                out.push(rel);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn init_creates_the_store_layout() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();

        dir.child("demogit-store/objects").assert(predicates::path::is_dir());
        dir.child("demogit-store/refs").assert(predicates::path::is_dir());
        dir.child("demogit-store/HEAD")
            .assert("ref: refs/heads/main\n");
        dir.child("index").assert("");
    }

    #[test]
    fn open_requires_an_initialized_store() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Repository::open(dir.path()),
            Err(GitError::NotARepository(_))
        ));
        Repository::init(dir.path()).unwrap();
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn remove_tears_down_store_and_index() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        Repository::remove(dir.path()).unwrap();
        dir.child("demogit-store").assert(predicates::path::missing());
        dir.child("index").assert(predicates::path::missing());
        assert!(matches!(
            Repository::remove(dir.path()),
            Err(GitError::NotARepository(_))
        ));
    }

    #[test]
    fn add_all_skips_dot_files_and_repository_metadata() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        dir.child("a.txt").write_str("hello").unwrap();
        dir.child(".secret").write_str("hidden").unwrap();

        let staged = repo.add(ADD_ALL).unwrap();
        assert_eq!(staged, 1);

        let index = repo.index().unwrap();
        assert!(index.contains_path("a.txt"));
        assert!(!index.contains_path(".secret"));
        assert!(!index.contains_path("index"));
    }

    #[test]
    fn add_missing_file_is_non_fatal() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        assert_eq!(repo.add("no-such-file.txt").unwrap(), 0);
        assert!(repo.index().unwrap().is_empty());
    }

    #[test]
    fn materialize_writes_stores_and_stages() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let id = repo.materialize("docs/readme.md", b"fetched").unwrap();
        dir.child("docs/readme.md").assert("fetched");
        assert!(repo.store().contains(&id));
        assert!(repo.index().unwrap().contains_path("docs/readme.md"));
    }
}
