use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use serenity_auth::{jwt, password};
use serenity_core::models::user::User;
use serenity_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    id: Uuid,
    username: String,
    email: String,
    token: String,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    id: Uuid,
    username: String,
    email: String,
}

fn required(field: Option<String>, name: &str) -> Result<String, ApiError> {
    field
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} is required")))
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = required(req.username, "Username")?;
    let email = required(req.email, "Email")?;
    let plaintext = required(req.password, "Password")?;

    let password_hash = password::hash_password(&plaintext)?;
    let user = User::new(username, email, password_hash);

    state.users.create(&user).await.map_err(|e| match e {
        StorageError::AlreadyExists { .. } => {
            ApiError::BadRequest("User already exists".to_string())
        }
        other => ApiError::from(other),
    })?;

    let token = jwt::issue_token(user.id, &state.jwt_secret)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            token,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = required(req.email, "Email")?;
    let plaintext = required(req.password, "Password")?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    if !password::verify_password(&plaintext, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Invalid email or password".to_string()));
    }

    let token = jwt::issue_token(user.id, &state.jwt_secret)?;

    Ok(Json(AuthResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        token,
    }))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state.users.load(user.id).await.map_err(|e| match e {
        StorageError::NotFound { .. } => ApiError::NotFound("User not found".to_string()),
        other => ApiError::from(other),
    })?;

    Ok(Json(ProfileResponse {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}
