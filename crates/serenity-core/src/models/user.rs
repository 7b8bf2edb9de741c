use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
///
/// `password_hash` is a bcrypt digest — plaintext passwords never touch the
/// store. The hash is not part of the API surface; response shaping happens
/// at the route layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: jiff::Timestamp,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: jiff::Timestamp::now(),
        }
    }
}
