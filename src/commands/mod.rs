mod add;
mod cat_file;
mod clone;
mod commit;
mod hash_object;
mod init;
mod ls_tree;
mod push;
mod remove;
mod status;
mod unstage;
mod write_tree;

pub use add::AddCommand;
pub use cat_file::{CatFileCommand, CatFileMode};
pub use clone::CloneCommand;
pub use commit::CommitCommand;
pub use hash_object::HashObjectCommand;
pub use init::InitCommand;
pub use ls_tree::LsTreeCommand;
pub use push::PushCommand;
pub use remove::RemoveCommand;
pub use status::StatusCommand;
pub use unstage::UnstageCommand;
pub use write_tree::WriteTreeCommand;
