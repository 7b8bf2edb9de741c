//! serenity-storage
//!
//! JSON document persistence over the local filesystem. One file per
//! aggregate (session, post, user), written atomically via temp-file +
//! rename, with per-aggregate locking and optimistic concurrency on the
//! session append path.

pub mod documents;
pub mod error;
pub mod posts;
pub mod sessions;
pub mod users;
