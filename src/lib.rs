//! DemoGit: a minimal content-addressable version-control engine.
//!
//! Immutable blob/tree/commit objects are keyed by the SHA-1 digest of
//! their canonical bytes and stored zlib-compressed under a two-level
//! fan-out; a staging index and branch refs sit on top of that store,
//! with push/clone delegated to a GitHub REST collaborator.

pub mod commands;
pub mod core;
pub mod remote;
pub mod repository;
pub mod utils;

// Re-export main components for easier consumption
pub use crate::core::{GitError, ObjectId, ObjectType, RepoConfig, Result};
pub use crate::repository::{Repository, StatusReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
