pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Credentials payload, shared by signup and login requests.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Must be between 3 and 32 characters, alphanumeric, and can include
    /// underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Only the hash of this value is ever persisted.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_credentials_validation() {
        let valid = Credentials {
            username: "test_user-123".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid_username = Credentials {
            username: "test user!".to_string(), // Contains space and exclamation
            password: "password123".to_string(),
        };
        assert!(invalid_username.validate().is_err());

        let short_username = Credentials {
            username: "tu".to_string(),
            password: "password123".to_string(),
        };
        assert!(short_username.validate().is_err());

        let long_username = Credentials {
            username: "a".repeat(33),
            password: "password123".to_string(),
        };
        assert!(long_username.validate().is_err());

        let empty_password = Credentials {
            username: "test_user".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_token_response_wire_format() {
        let response = TokenResponse {
            access_token: "abc".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["accessToken"], "abc");
    }
}
