use chrono::{DateTime, Utc};

use crate::user::{Comment, Post, User};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn timestamp(t: &DateTime<Utc>) -> String {
    t.format(TIME_FORMAT).to_string()
}

fn render_comment(comment: &Comment) -> String {
    format!(
        "    > {} ({}): {}",
        comment.author,
        timestamp(&comment.created_at),
        comment.text
    )
}

/// Boxed, multi-line view of a post with its comments.
pub fn render_post(post: &Post) -> String {
    let mut out = String::new();
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "| Post by: {} ({})\n",
        post.author,
        timestamp(&post.created_at)
    ));
    out.push_str(&format!("| Post ID: {}\n", post.id));
    out.push_str("|-------------------------------------------------\n");
    out.push_str(&format!("| {}\n", post.content));
    out.push_str("|-------------------------------------------------\n");
    out.push_str(&format!(
        "| Likes: {} | Comments: {}\n",
        post.likes,
        post.comments.len()
    ));
    out.push_str("|-------------------------------------------------\n");
    if post.comments.is_empty() {
        out.push_str("|   No comments yet.\n");
    } else {
        for comment in &post.comments {
            out.push_str(&render_comment(comment));
            out.push('\n');
        }
    }
    out.push_str("--------------------------------------------------");
    out
}

/// Profile view: info line, friend names, then `posts` (expected newest
/// first).
pub fn render_profile(user: &User, posts: &[&Post]) -> String {
    let mut out = String::new();
    out.push_str("========================================\n");
    out.push_str(&format!("          User Profile: {}\n", user.username));
    out.push_str("========================================\n");
    out.push_str(&format!("Info: {}\n", user.profile_info));
    out.push_str(&format!("Friends ({}): ", user.friends.len()));
    if user.friends.is_empty() {
        out.push_str("No friends yet.\n");
    } else {
        out.push_str(&user.friends.join(", "));
        out.push('\n');
    }
    out.push_str("----------------------------------------\n");
    out.push_str(&format!("Posts by {}:\n", user.username));
    if posts.is_empty() {
        out.push_str("No posts yet.\n");
    } else {
        for post in posts {
            out.push_str(&render_post(post));
            out.push('\n');
        }
    }
    out.push_str("========================================");
    out
}
