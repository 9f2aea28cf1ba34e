use std::path::{Path, PathBuf};

use tokio::runtime::Runtime;

use crate::core::{GitError, Result};
use crate::remote::GitHubClient;
use crate::repository::Repository;

/// Implements the `push` command functionality
pub struct PushCommand {
    /// Access token for the hosting API
    token: String,
    /// Name of the repository to create and upload into
    repo_name: String,
    /// Repository path
    path: PathBuf,
}

impl PushCommand {
    /// Create a new push command
    pub fn new(token: &str, repo_name: &str, path: &Path) -> Self {
        Self {
            token: token.to_string(),
            repo_name: repo_name.to_string(),
            path: path.to_path_buf(),
        }
    }

    /// Execute the push command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;

        let entries = repo.export_head()?;
        if entries.is_empty() {
            println!("Nothing to push (no commits yet)");
            return Ok(());
        }

        let rt = Runtime::new()
            .map_err(|e| GitError::Remote(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let client = GitHubClient::new(&self.token)?;
            let (full_name, clone_url) = client.create_repository(&self.repo_name).await?;
            println!("Pushing {} file(s) to {}", entries.len(), clone_url);

            for entry in &entries {
                client
                    .upload_file(
                        &full_name,
                        &entry.path,
                        &entry.bytes,
                        &format!("Add {}", entry.path),
                    )
                    .await?;
                println!("  {} {}", entry.id, entry.path);
            }
            Ok::<(), GitError>(())
        })?;

        println!("Push successful!");
        Ok(())
    }
}
