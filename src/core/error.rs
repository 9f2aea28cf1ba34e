use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, GitError>;

/// Errors surfaced by the codec, store, index and ref layers
#[derive(Debug, Error)]
pub enum GitError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or too-short digest string
    #[error("invalid digest '{0}'")]
    InvalidDigest(String),

    /// No object file exists for the digest
    #[error("object {0} not found")]
    ObjectNotFound(String),

    /// The object file exists but could not be decompressed
    #[error("corrupt object: {0}")]
    CorruptObject(String),

    /// The decompressed bytes violate the object format
    #[error("malformed object: {0}")]
    MalformedObject(String),

    /// Operation requires an initialized store
    #[error("not a demogit repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// Commit attempted with an empty index
    #[error("nothing to commit (index is empty)")]
    NothingToCommit,

    /// Commit attempted with an empty message
    #[error("commit message must not be empty")]
    EmptyMessage,

    /// Directory recursion exceeded the depth bound
    #[error("maximum directory depth ({0}) exceeded")]
    MaxDepthExceeded(usize),

    /// A path passed to `add` no longer exists; recoverable during bulk add
    #[error("file '{0}' does not exist")]
    FileMissing(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote API errors
    #[error("remote error: {0}")]
    Remote(String),
}

impl From<hex::FromHexError> for GitError {
    fn from(err: hex::FromHexError) -> Self {
        GitError::InvalidDigest(err.to_string())
    }
}

impl From<toml::de::Error> for GitError {
    fn from(err: toml::de::Error) -> Self {
        GitError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GitError {
    fn from(err: toml::ser::Error) -> Self {
        GitError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for GitError {
    fn from(err: reqwest::Error) -> Self {
        GitError::Remote(err.to_string())
    }
}
