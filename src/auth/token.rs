use crate::error::AppError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the username of the authenticated user.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies signed, time-bounded access tokens.
///
/// Holds the process-wide signing secret and token lifetime, both taken from
/// configuration once at startup rather than read per request. Constructed in
/// `main.rs` and shared with handlers and the auth middleware as app data.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expires_in: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expires_in: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_in,
        }
    }

    /// Produces a signed token encoding the given username as its subject.
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: username.to_owned(),
            iat: now,
            exp: now + self.expires_in,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to issue token: {}", e)))
    }

    /// Verifies the signature and expiry of a token and returns its claims.
    ///
    /// All failure modes (malformed, tampered, expired) collapse into the same
    /// generic `Unauthorized` error.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized("Invalid token".into()))
    }
}
