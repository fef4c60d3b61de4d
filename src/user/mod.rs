mod post;
mod user;

pub use post::{Comment, Post, PostId};
pub use user::{User, DEFAULT_PROFILE_INFO};
