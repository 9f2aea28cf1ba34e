mod config;
mod error;
mod object;
mod tree;

pub use config::{RepoConfig, UserConfig};
pub use error::{GitError, Result};
pub use object::{decode, encode, ObjectId, ObjectType};
pub use tree::{EntryMode, Tree, TreeEntry};
