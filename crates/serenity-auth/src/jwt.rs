use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// Fixed token lifetime: 30 days.
pub const TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Claims carried by a bearer token. Only the user id — nothing else is
/// encoded in the token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a signed HS256 token for `user_id`, expiring in 30 days.
pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String, AuthError> {
    let now = jiff::Timestamp::now().as_second();
    let claims = Claims {
        sub: user_id,
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Validate a token's signature and expiry, returning its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(e.to_string()),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_round_trips() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET).unwrap();

        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        let result = validate_token(&token, "a-different-secret");
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = validate_token("not.a.token", SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = "eyJzdWIiOiJmb3JnZWQifQ";
        parts[1] = forged_payload;
        let forged = parts.join(".");

        assert!(validate_token(&forged, SECRET).is_err());
    }
}
