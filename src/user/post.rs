use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

static POST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Opaque post token. Lexicographic order equals creation order: the token
/// starts with a zero-padded millisecond timestamp, then a process-global
/// sequence number that breaks same-millisecond ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(String);

impl PostId {
    pub fn generate(created_at: DateTime<Utc>) -> PostId {
        let seq = POST_SEQ.fetch_add(1, Ordering::Relaxed);
        let suffix: [u8; 4] = rand::thread_rng().gen();
        PostId(format!(
            "{:016x}-{:08x}-{}",
            created_at.timestamp_millis(),
            seq,
            hex::encode(suffix)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> PostId {
        PostId(s.to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(author: &str, content: &str) -> Post {
        let created_at = Utc::now();
        Post {
            id: PostId::generate(created_at),
            author: author.to_string(),
            content: content.to_string(),
            created_at,
            likes: 0,
            comments: Vec::new(),
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn add_like(&mut self) {
        self.likes += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &str, text: &str) -> Comment {
        Comment {
            author: author.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }
}
