use crate::error::AppError;
use bcrypt::{hash, verify};

/// Work factor for the salted bcrypt transform. Deliberately slow to resist
/// brute force; the signup/login latency this adds is accepted.
const BCRYPT_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored hash.
///
/// A wrong password is `Ok(false)`, never an error. Only a malformed stored
/// hash surfaces as an internal error.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
