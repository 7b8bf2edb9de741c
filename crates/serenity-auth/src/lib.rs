//! serenity-auth
//!
//! Token issuance and validation plus password hashing. Tokens are
//! self-issued HS256 JWTs carrying only the user id, with a fixed 30-day
//! expiry.

pub mod error;
pub mod jwt;
pub mod password;
