use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::core::Result;
use crate::repository::Repository;

/// What `cat-file` prints about a stored object
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatFileMode {
    /// The object kind ("blob", "tree", "commit")
    Type,
    /// The payload length in bytes
    Size,
    /// The raw payload bytes
    Content,
}

/// Implements the `cat-file` command functionality
pub struct CatFileCommand {
    mode: CatFileMode,
    /// Digest of the object to inspect
    digest: String,
    /// Repository path
    path: PathBuf,
}

impl CatFileCommand {
    /// Create a new cat-file command
    pub fn new(mode: CatFileMode, digest: &str, path: &Path) -> Self {
        Self {
            mode,
            digest: digest.to_string(),
            path: path.to_path_buf(),
        }
    }

    /// Execute the cat-file command
    pub fn execute(&self) -> Result<()> {
        let repo = Repository::open(&self.path)?;
        let (kind, payload) = repo.store().get_by_hex(&self.digest)?;

        match self.mode {
            CatFileMode::Type => println!("{}", kind.as_str()),
            CatFileMode::Size => println!("{}", payload.len()),
            CatFileMode::Content => {
                io::stdout().write_all(&payload)?;
            }
        }
        Ok(())
    }
}
