mod directory;

pub use directory::Directory;

use thiserror::Error;

use crate::user::PostId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Username '{0}' already exists")]
    DuplicateUser(String),
    #[error("User '{0}' not found")]
    UnknownUser(String),
    #[error("Post with ID '{0}' not found")]
    UnknownPost(PostId),
    #[error("You cannot add yourself as a friend")]
    SelfFriendRequest,
}
