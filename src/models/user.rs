use serde::Serialize;
use sqlx::FromRow;

/// A user row as stored in the database.
///
/// The password hash never leaves the server: it is skipped during
/// serialization so no handler can leak it by returning a `User`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
