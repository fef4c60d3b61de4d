use std::collections::HashMap;

use log::{debug, info};

use super::DirectoryError;
use crate::user::{Comment, Post, PostId, User};

/// Owns every user and post in the network, keyed by identifier. All
/// mutation goes through here so the username and post-id invariants hold
/// in one place.
pub struct Directory {
    users: HashMap<String, User>,
    posts: HashMap<PostId, Post>,
    roster: Vec<String>, // usernames in creation order, for stable listings
}

impl Directory {
    pub fn new() -> Directory {
        Directory {
            users: HashMap::new(),
            posts: HashMap::new(),
            roster: Vec::new(),
        }
    }

    pub fn create_user(&mut self, username: &str) -> Result<&User, DirectoryError> {
        if self.users.contains_key(username) {
            return Err(DirectoryError::DuplicateUser(username.to_string()));
        }
        info!("user created: {}", username);
        self.roster.push(username.to_string());
        Ok(self
            .users
            .entry(username.to_string())
            .or_insert_with(|| User::new(username)))
    }

    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn set_profile_info(&mut self, username: &str, info: &str) -> Result<(), DirectoryError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| DirectoryError::UnknownUser(username.to_string()))?;
        user.profile_info = info.to_string();
        Ok(())
    }

    pub fn create_post(&mut self, username: &str, content: &str) -> Result<PostId, DirectoryError> {
        let author = self
            .users
            .get_mut(username)
            .ok_or_else(|| DirectoryError::UnknownUser(username.to_string()))?;
        let post = Post::new(username, content);
        let id = post.id.clone();
        author.add_post(id.clone());
        self.posts.insert(id.clone(), post);
        debug!("post {} created by {}", id, username);
        Ok(id)
    }

    /// Mutual friendship. Either both friend lists gain an entry or
    /// nothing changes.
    pub fn add_friend(&mut self, a: &str, b: &str) -> Result<(), DirectoryError> {
        if a == b {
            return Err(DirectoryError::SelfFriendRequest);
        }
        if !self.users.contains_key(a) {
            return Err(DirectoryError::UnknownUser(a.to_string()));
        }
        if !self.users.contains_key(b) {
            return Err(DirectoryError::UnknownUser(b.to_string()));
        }
        if let Some(user) = self.users.get_mut(a) {
            user.add_friend(b);
        }
        if let Some(user) = self.users.get_mut(b) {
            user.add_friend(a);
        }
        debug!("{} and {} are now friends", a, b);
        Ok(())
    }

    pub fn add_comment(
        &mut self,
        id: &PostId,
        author: &str,
        text: &str,
    ) -> Result<(), DirectoryError> {
        if !self.posts.contains_key(id) {
            return Err(DirectoryError::UnknownPost(id.clone()));
        }
        if !self.users.contains_key(author) {
            return Err(DirectoryError::UnknownUser(author.to_string()));
        }
        if let Some(post) = self.posts.get_mut(id) {
            post.add_comment(Comment::new(author, text));
        }
        Ok(())
    }

    pub fn like_post(&mut self, id: &PostId) -> Result<&Post, DirectoryError> {
        let post = self
            .posts
            .get_mut(id)
            .ok_or_else(|| DirectoryError::UnknownPost(id.clone()))?;
        post.add_like();
        debug!("post {} liked ({} total)", id, post.likes);
        Ok(&*post)
    }

    pub fn usernames(&self) -> &[String] {
        &self.roster
    }

    /// The user's own posts plus every direct friend's posts, most recent
    /// first. Post ids sort in creation order, so descending id order is
    /// descending recency.
    pub fn news_feed(&self, username: &str) -> Result<Vec<&Post>, DirectoryError> {
        let user = self
            .users
            .get(username)
            .ok_or_else(|| DirectoryError::UnknownUser(username.to_string()))?;
        let mut feed = self.posts_of(user);
        for name in &user.friends {
            if let Some(friend) = self.users.get(name) {
                feed.extend(self.posts_of(friend));
            }
        }
        feed.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(feed)
    }

    /// A user's own posts in creation order.
    pub fn posts_of(&self, user: &User) -> Vec<&Post> {
        user.posts
            .iter()
            .filter_map(|id| self.posts.get(id))
            .collect()
    }
}

impl Default for Directory {
    fn default() -> Directory {
        Directory::new()
    }
}
