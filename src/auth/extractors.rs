use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;
use crate::models::User;

/// Extracts the authenticated user from request extensions.
///
/// This extractor is intended for routes protected by `AuthMiddleware`, which
/// validates the bearer token, resolves it to a `User` row, and inserts that
/// user into request extensions.
///
/// If no user is present in the extensions (e.g. `AuthMiddleware` did not run),
/// this extractor returns `AppError::Unauthorized`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<User>().cloned() {
            Some(user) => ready(Ok(AuthenticatedUser(user))),
            None => {
                // Only reachable when the middleware is not applied to the
                // route; rejecting as unauthorized is the safe default.
                let err = AppError::Unauthorized("Authentication required".to_string());
                ready(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn sample_user() -> User {
        User {
            id: 123,
            username: "sample".to_string(),
            password_hash: "$2b$10$irrelevant".to_string(),
        }
    }

    #[actix_rt::test]
    async fn test_authenticated_user_extractor_success() {
        let req = test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(sample_user());

        let mut payload = Payload::None;
        let extracted = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert!(extracted.is_ok());

        let user = extracted.unwrap().0;
        assert_eq!(user.id, 123);
        assert_eq!(user.username, "sample");
    }

    #[actix_rt::test]
    async fn test_authenticated_user_extractor_failure() {
        let req = test::TestRequest::default().to_http_request();
        // No user inserted into extensions

        let mut payload = Payload::None;
        let extracted = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert!(extracted.is_err());

        let err = extracted.unwrap_err();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
