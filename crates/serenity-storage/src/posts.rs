use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use serenity_core::models::post::{Comment, Post};
use serenity_core::store_keys;

use crate::documents::DocumentStore;
use crate::error::StorageError;

/// Persistence for community [`Post`] aggregates.
///
/// Comments are embedded in the post document and append-only; likes are
/// increment-only. Both mutations take the per-post lock so concurrent
/// requests don't lose updates.
pub struct PostStore {
    docs: DocumentStore,
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl PostStore {
    pub fn new(docs: DocumentStore) -> Self {
        Self {
            docs,
            locks: Mutex::new(HashMap::new()),
        }
    }

    async fn lock_for(&self, id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(id).or_default().clone()
    }

    pub async fn create(&self, post: &Post) -> Result<(), StorageError> {
        self.docs.write_json(&store_keys::post(post.id), post).await
    }

    pub async fn load(&self, id: Uuid) -> Result<Post, StorageError> {
        self.docs.read_json(&store_keys::post(id)).await
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, StorageError> {
        let keys = self.docs.list_keys(store_keys::POSTS_PREFIX).await?;

        let mut posts = Vec::new();
        for key in &keys {
            let post: Post = self.docs.read_json(key).await?;
            posts.push(post);
        }

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    /// Append a comment and return the updated post.
    pub async fn add_comment(&self, id: Uuid, comment: Comment) -> Result<Post, StorageError> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut post = self.load(id).await?;
        post.comments.push(comment);
        self.docs.write_json(&store_keys::post(id), &post).await?;
        Ok(post)
    }

    /// Increment the like counter and return the new count.
    pub async fn like(&self, id: Uuid) -> Result<u64, StorageError> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut post = self.load(id).await?;
        post.likes += 1;
        self.docs.write_json(&store_keys::post(id), &post).await?;
        Ok(post.likes)
    }
}
