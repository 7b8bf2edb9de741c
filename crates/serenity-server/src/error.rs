use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    PayloadTooLarge(String),
    Conflict(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

impl From<serenity_storage::error::StorageError> for ApiError {
    fn from(e: serenity_storage::error::StorageError) -> Self {
        use serenity_storage::error::StorageError;
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("not found: {key}")),
            StorageError::Conflict { key } => {
                ApiError::Conflict(format!("concurrent update on: {key}"))
            }
            StorageError::AlreadyExists { key } => {
                ApiError::BadRequest(format!("already exists: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serenity_gemini::error::GeminiError> for ApiError {
    fn from(e: serenity_gemini::error::GeminiError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serenity_emotion::ClassificationError> for ApiError {
    fn from(e: serenity_emotion::ClassificationError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serenity_auth::error::AuthError> for ApiError {
    fn from(e: serenity_auth::error::AuthError) -> Self {
        match e {
            serenity_auth::error::AuthError::TokenExpired
            | serenity_auth::error::AuthError::InvalidToken(_) => {
                ApiError::Unauthorized("Not authorized".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}
