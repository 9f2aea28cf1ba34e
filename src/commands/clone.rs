use std::fs;
use std::path::{Path, PathBuf};

use tokio::runtime::Runtime;

use crate::core::{GitError, Result};
use crate::remote::GitHubClient;
use crate::repository::Repository;
use crate::utils::repo_name_from_url;

/// Implements the `clone` command functionality
pub struct CloneCommand {
    /// Access token for the hosting API
    token: String,
    /// URL of the repository to clone
    url: String,
    /// Directory to clone into
    target: PathBuf,
}

impl CloneCommand {
    /// Create a new clone command
    pub fn new(token: &str, url: &str, target: &Path) -> Self {
        Self {
            token: token.to_string(),
            url: url.to_string(),
            target: target.to_path_buf(),
        }
    }

    /// Execute the clone command
    pub fn execute(&self) -> Result<()> {
        let repo_name = repo_name_from_url(&self.url)?;

        fs::create_dir_all(&self.target)?;
        let repo = Repository::init(&self.target)?;

        let rt = Runtime::new()
            .map_err(|e| GitError::Remote(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let client = GitHubClient::new(&self.token)?;
            let files = client.list_files(&repo_name).await?;
            println!("Cloning {} file(s) from {}", files.len(), self.url);

            for file in files {
                let bytes = client.fetch_file(&file.download_url).await?;
                repo.materialize(&file.path, &bytes)?;
                println!("  {}", file.path);
            }
            Ok::<(), GitError>(())
        })?;

        println!("Clone complete");
        Ok(())
    }
}
