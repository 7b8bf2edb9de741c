//! serenity-core
//!
//! Pure domain types, the emotion taxonomy, and document key conventions.
//! No I/O dependency — this is the shared vocabulary of the SerenityBot
//! system.

pub mod emotion;
pub mod error;
pub mod models;
pub mod store_keys;
