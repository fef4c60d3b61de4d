mod app;
mod render;

pub use app::{seed_demo, App};
pub use render::{render_post, render_profile};

use std::io;

use thiserror::Error;

use crate::network::DirectoryError;

/// Failures raised while handling a single console command. All of them
/// except `Io` are reported to the user and leave the session unchanged.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid choice. Please try again")]
    InvalidMenuChoice,
    #[error("That post ID is not in your feed or does not exist")]
    PostNotInFeed,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
