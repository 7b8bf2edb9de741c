use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::AuthError;

/// Hash a plaintext password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Check a plaintext password against a stored bcrypt digest.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    verify(password, password_hash).map_err(|e| AuthError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_rejects() {
        let digest = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &digest).unwrap());
        assert!(!verify_password("wrong password", &digest).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
    }
}
