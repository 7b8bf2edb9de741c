use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use serenity_auth::jwt;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Bearer-token validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header, validates the
/// signature and expiry, and inserts [`AuthUser`] into request extensions
/// for handlers to use. Missing, malformed, or expired tokens are 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token".to_string()))?;

    let claims = jwt::validate_token(token, &state.jwt_secret)?;

    req.extensions_mut().insert(AuthUser { id: claims.sub });

    Ok(next.run(req).await)
}
