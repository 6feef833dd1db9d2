use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::auth::token::TokenService;
use crate::error::AppError;
use crate::store::UserStore;

/// Bearer-token authorization middleware.
///
/// Signup, login, and the health check pass through untouched. Every other
/// request must carry `Authorization: Bearer <token>`; the token is decoded
/// and its subject resolved to a live `User` row, which is attached to the
/// request extensions for the `AuthenticatedUser` extractor. Any failure along
/// that chain rejects the request with a generic 401.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    // Rc because the call future must own the service across the user lookup.
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Skip authentication for the health check and auth endpoints
        let path = req.path();
        if path == "/health" || path == "/auth/signup" || path == "/auth/login" {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token =
                token.ok_or_else(|| AppError::Unauthorized("Missing token".to_string()))?;

            let tokens = req
                .app_data::<web::Data<TokenService>>()
                .cloned()
                .ok_or_else(|| AppError::Internal("TokenService not configured".to_string()))?;
            let users = req
                .app_data::<web::Data<UserStore>>()
                .cloned()
                .ok_or_else(|| AppError::Internal("UserStore not configured".to_string()))?;

            let claims = tokens.decode(&token)?;

            // The subject must still resolve to a stored user; a token for a
            // deleted account is as invalid as a tampered one.
            let user = users
                .find_by_username(&claims.sub)
                .await?
                .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))?;

            req.extensions_mut().insert(user);
            service.call(req).await
        })
    }
}
