use std::sync::Arc;

use serenity_emotion::EmotionScorer;
use serenity_gemini::client::GeminiClient;
use serenity_storage::posts::PostStore;
use serenity_storage::sessions::SessionStore;
use serenity_storage::users::UserStore;

/// Shared application state, injected into all route handlers via Axum
/// state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub posts: Arc<PostStore>,
    pub users: Arc<UserStore>,
    pub gemini: Arc<GeminiClient>,
    pub scorer: Arc<EmotionScorer>,
    pub jwt_secret: String,
}
