//! Document key/path conventions.
//!
//! Pure string functions — no filesystem dependency. These define the
//! canonical layout of JSON documents under the store's data directory.

use uuid::Uuid;

pub fn session(id: Uuid) -> String {
    format!("sessions/{id}.json")
}

pub const SESSIONS_PREFIX: &str = "sessions/";

pub fn post(id: Uuid) -> String {
    format!("posts/{id}.json")
}

pub const POSTS_PREFIX: &str = "posts/";

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

pub const USERS_PREFIX: &str = "users/";
