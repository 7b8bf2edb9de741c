use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod routes;
mod state;

use config::ServerConfig;
use serenity_emotion::{
    EmotionScorer, GeminiSentimentClassifier, NeutralFaceClassifier, NeutralVoiceClassifier,
};
use serenity_gemini::client::GeminiClient;
use serenity_storage::documents::DocumentStore;
use serenity_storage::posts::PostStore;
use serenity_storage::sessions::SessionStore;
use serenity_storage::users::UserStore;
use state::AppState;

/// Transport-level body cap; the send-message handler applies its own
/// 45 MiB admission check below this.
const BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let docs = DocumentStore::open(&config.data_dir).await?;
    let sessions = Arc::new(SessionStore::new(docs.clone()));
    let posts = Arc::new(PostStore::new(docs.clone()));
    let users = Arc::new(UserStore::new(docs));

    let gemini = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_timeout,
    )?);

    let scorer = Arc::new(EmotionScorer::new(
        Arc::new(GeminiSentimentClassifier::new(gemini.clone())),
        Arc::new(NeutralVoiceClassifier),
        Arc::new(NeutralFaceClassifier),
    ));

    let state = AppState {
        sessions,
        posts,
        users,
        gemini,
        scorer,
        jwt_secret: config.jwt_secret.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/api/auth/profile", get(routes::auth::profile))
        .route("/api/chat/message", post(routes::chat::send_message))
        .route("/api/chat", get(routes::chat::list_chats))
        .route("/api/chat/{id}", get(routes::chat::get_chat))
        .route("/api/chat/{id}", delete(routes::chat::delete_chat))
        .route("/api/chat/analyze-mood", post(routes::chat::analyze_mood))
        .route("/api/chat/analyze-voice", post(routes::chat::analyze_voice))
        .route("/api/chat/analyze-face", post(routes::chat::analyze_face))
        .route(
            "/api/chat/analyze-emotion",
            post(routes::chat::analyze_emotion),
        )
        .route(
            "/api/chat/analyze-thought",
            post(routes::chat::analyze_thought),
        )
        .route(
            "/api/chat/reframe-thought",
            post(routes::chat::reframe_thought),
        )
        .route("/api/community/posts", post(routes::community::create_post))
        .route("/api/community/posts", get(routes::community::get_posts))
        .route("/api/community/posts/{id}", get(routes::community::get_post))
        .route(
            "/api/community/posts/{id}/comments",
            post(routes::community::add_comment),
        )
        .route(
            "/api/community/posts/{id}/like",
            put(routes::community::like_post),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = Router::new()
        .route("/", get(routes::health::welcome))
        .route("/health", get(routes::health::health_check))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "SerenityBot API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
