use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::repository::Repository;

/// Implements the `status` command functionality
pub struct StatusCommand {
    /// Repository path
    path: PathBuf,
}

impl StatusCommand {
    /// Create a new status command
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Execute the status command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;

        let branch = repo.current_branch()?;
        let short = branch.rsplit('/').next().unwrap_or(&branch);
        println!("On branch {}", short);

        let report = repo.status()?;
        if report.is_clean() {
            println!("Nothing to commit, working tree clean");
            return Ok(());
        }

        if !report.staged.is_empty() {
            println!("\nChanges to be committed:");
            println!("  (use \"demogit unstage-all\" to unstage)");
            for path in &report.staged {
                println!("\t{}", path);
            }
        }

        if !report.unstaged.is_empty() {
            println!("\nChanges not staged for commit:");
            println!("  (use \"demogit add <file>...\" to update what will be committed)");
            for path in &report.unstaged {
                println!("\t{}", path);
            }
        }

        if !report.untracked.is_empty() {
            println!("\nUntracked files:");
            println!("  (use \"demogit add <file>...\" to include in what will be committed)");
            for path in &report.untracked {
                println!("\t{}", path);
            }
        }

        Ok(())
    }
}
