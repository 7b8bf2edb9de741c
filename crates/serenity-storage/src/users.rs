use tokio::sync::Mutex;
use uuid::Uuid;

use serenity_core::models::user::User;
use serenity_core::store_keys;

use crate::documents::DocumentStore;
use crate::error::StorageError;

/// Persistence for [`User`] accounts.
///
/// Email lookup is a scan over the users prefix; the account population of
/// a single deployment is small enough that no secondary index is kept.
pub struct UserStore {
    docs: DocumentStore,
    create_lock: Mutex<()>,
}

impl UserStore {
    pub fn new(docs: DocumentStore) -> Self {
        Self {
            docs,
            create_lock: Mutex::new(()),
        }
    }

    /// Persist a new account. Fails with `AlreadyExists` when the email is
    /// already registered; the uniqueness check and the write happen under
    /// one lock so concurrent registrations can't both succeed.
    pub async fn create(&self, user: &User) -> Result<(), StorageError> {
        let _guard = self.create_lock.lock().await;

        if self.find_by_email(&user.email).await?.is_some() {
            return Err(StorageError::AlreadyExists {
                key: store_keys::user(user.id),
            });
        }

        self.docs.write_json(&store_keys::user(user.id), user).await
    }

    pub async fn load(&self, id: Uuid) -> Result<User, StorageError> {
        self.docs.read_json(&store_keys::user(id)).await
    }

    /// Find an account by email, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let keys = self.docs.list_keys(store_keys::USERS_PREFIX).await?;

        for key in &keys {
            let user: User = self.docs.read_json(key).await?;
            if user.email.eq_ignore_ascii_case(email) {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }
}
