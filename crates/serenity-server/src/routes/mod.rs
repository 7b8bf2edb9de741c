pub mod auth;
pub mod chat;
pub mod community;
pub mod health;
