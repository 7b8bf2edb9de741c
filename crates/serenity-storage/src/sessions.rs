use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use serenity_core::models::chat::{ChatSession, Message};
use serenity_core::store_keys;

use crate::documents::DocumentStore;
use crate::error::StorageError;

/// Persistence for [`ChatSession`] aggregates.
///
/// All lookups are scoped by both session id and owner id — a session that
/// exists but belongs to another user reads as `NotFound`, never as a
/// distinct "forbidden".
///
/// The append path is a single atomic read-modify-write: a per-session
/// mutex serializes writers in this process, and the caller's expected
/// message count is checked against the stored document so a stale writer
/// fails with `Conflict` instead of silently dropping an update.
pub struct SessionStore {
    docs: DocumentStore,
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl SessionStore {
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

    /// Create and persist an empty session for `owner_id`.
    pub async fn create(&self, owner_id: Uuid) -> Result<ChatSession, StorageError> {
        let session = ChatSession::new(owner_id);
        self.docs
            .write_json(&store_keys::session(session.id), &session)
            .await?;
        debug!(session_id = %session.id, "created chat session");
        Ok(session)
    }

    /// Load a session by id, scoped to its owner.
    pub async fn load(&self, id: Uuid, owner_id: Uuid) -> Result<ChatSession, StorageError> {
        let key = store_keys::session(id);
        let session: ChatSession = self.docs.read_json(&key).await?;
        if session.owner_id != owner_id {
            return Err(StorageError::NotFound { key });
        }
        Ok(session)
    }

    /// All sessions for `owner_id`, newest `updated_at` first.
    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<ChatSession>, StorageError> {
        let keys = self.docs.list_keys(store_keys::SESSIONS_PREFIX).await?;

        let mut sessions = Vec::new();
        for key in &keys {
            let session: ChatSession = self.docs.read_json(key).await?;
            if session.owner_id == owner_id {
                sessions.push(session);
            }
        }

        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sessions)
    }

    /// Append a user/assistant pair in one atomic update.
    ///
    /// `expected_len` is the message count the caller observed when it
    /// assembled the exchange; a mismatch means another writer got there
    /// first and the call fails with [`StorageError::Conflict`]. On success
    /// the title rule is applied by the session itself when the count
    /// reaches two, and the updated session is returned.
    pub async fn append_turn(
        &self,
        id: Uuid,
        owner_id: Uuid,
        expected_len: usize,
        user: Message,
        assistant: Message,
    ) -> Result<ChatSession, StorageError> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let key = store_keys::session(id);
        let mut session = self.load(id, owner_id).await?;

        if session.messages.len() != expected_len {
            debug!(
                session_id = %id,
                expected = expected_len,
                actual = session.messages.len(),
                "append rejected: message count moved"
            );
            return Err(StorageError::Conflict { key });
        }

        session.append_turn(user, assistant);
        self.docs.write_json(&key, &session).await?;
        Ok(session)
    }

    /// Permanently remove a session. A second delete reports `NotFound`.
    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), StorageError> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        // Owner-scoped existence check before the actual removal.
        self.load(id, owner_id).await?;
        self.docs.delete(&store_keys::session(id)).await?;

        let mut locks = self.locks.lock().await;
        locks.remove(&id);
        Ok(())
    }
}
