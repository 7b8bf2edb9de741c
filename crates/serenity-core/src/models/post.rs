use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on a community post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub content: String,
    pub author_id: Uuid,
    pub is_anonymous: bool,
    pub likes: u64,
    pub created_at: jiff::Timestamp,
}

impl Comment {
    pub fn new(content: impl Into<String>, author_id: Uuid, is_anonymous: bool) -> Self {
        Self {
            content: content.into(),
            author_id,
            is_anonymous,
            likes: 0,
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// A community post with an embedded, append-only comment list.
///
/// `likes` is a monotonic counter — the only exposed mutation is an
/// increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub is_anonymous: bool,
    pub likes: u64,
    pub comments: Vec<Comment>,
    pub created_at: jiff::Timestamp,
}

impl Post {
    pub fn new(content: impl Into<String>, author_id: Uuid, is_anonymous: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            author_id,
            is_anonymous,
            likes: 0,
            comments: Vec::new(),
            created_at: jiff::Timestamp::now(),
        }
    }
}
