use crate::{
    auth::{Credentials, TokenResponse, TokenService},
    error::AppError,
    store::UserStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account. The response carries no body; the client logs
/// in afterwards to obtain a token.
#[post("/signup")]
pub async fn signup(
    users: web::Data<UserStore>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    // Validate input
    credentials.validate()?;

    users.sign_up(&credentials).await?;

    Ok(HttpResponse::Created().finish())
}

/// Login user
///
/// Exchanges valid credentials for an access token. Unknown usernames and
/// wrong passwords are rejected identically.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    // Validate input
    credentials.validate()?;

    match users.validate_credentials(&credentials).await? {
        Some(username) => {
            let access_token = tokens.issue(&username)?;
            Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
