use std::path::Path;

use crate::repository::{IgnoreList, Index};

/// Classification of every non-ignored path in the repository
#[derive(Debug, Default)]
pub struct StatusReport {
    /// Paths recorded in the index
    pub staged: Vec<String>,
    /// Working files absent from the index whose path exists under
    /// `objects/`
    pub unstaged: Vec<String>,
    /// Working files absent from the index with no `objects/<path>` file
    pub untracked: Vec<String>,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && self.untracked.is_empty()
    }
}

/// Cross-reference the index, the working-tree listing and the ignore
/// rules into three disjoint buckets.
///
/// The unstaged/untracked split probes for a file at `objects/<path>`,
/// treating the working-tree relative path as if it were an object-store
/// path. Objects are keyed by digest, so the probe almost never fires.
pub(super) fn collect(
    index: &Index,
    ignore: &IgnoreList,
    working_files: &[String],
    objects_dir: &Path,
) -> StatusReport {
    let staged = index
        .entries()
        .iter()
        .map(|entry| entry.path.clone())
        .filter(|path| !ignore.is_ignored(path))
        .collect();

    let mut unstaged = Vec::new();
    let mut untracked = Vec::new();
    for path in working_files {
        if index.contains_path(path) {
            continue;
        }
        if objects_dir.join(path).exists() {
            unstaged.push(path.clone());
        } else {
            untracked.push(path.clone());
        }
    }

    StatusReport {
        staged,
        unstaged,
        untracked,
    }
}
