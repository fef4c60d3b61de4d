use serde::{Deserialize, Serialize};

use super::post::PostId;

pub const DEFAULT_PROFILE_INFO: &str = "No profile information set.";

/// A member of the network. Friends and posts are held as identifier
/// references; the owning records live in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub profile_info: String,
    pub friends: Vec<String>,
    pub posts: Vec<PostId>,
}

impl User {
    pub fn new(username: &str) -> User {
        User {
            username: username.to_string(),
            profile_info: DEFAULT_PROFILE_INFO.to_string(),
            friends: Vec::new(),
            posts: Vec::new(),
        }
    }

    /// Records a friendship with `username`. Duplicates are ignored.
    pub fn add_friend(&mut self, username: &str) {
        if !self.friends.iter().any(|f| f == username) {
            self.friends.push(username.to_string());
        }
    }

    pub fn add_post(&mut self, id: PostId) {
        self.posts.push(id);
    }

    pub fn is_friend_of(&self, username: &str) -> bool {
        self.friends.iter().any(|f| f == username)
    }
}
