//! Auth errors

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown login handle or wrong password; callers must not be able
    /// to tell which
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Session cookie is malformed or its signature does not check out
    #[error("invalid session")]
    InvalidSession,

    /// Session signature is valid but the session has expired
    #[error("session expired")]
    SessionExpired,

    /// Session subject no longer resolves to a user
    #[error("user not found")]
    UserNotFound,

    /// Email already registered
    #[error("email already registered")]
    DuplicateEmail,

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<konfetka_db::DbError> for AuthError {
    fn from(err: konfetka_db::DbError) -> Self {
        match err {
            konfetka_db::DbError::Duplicate => Self::DuplicateEmail,
            konfetka_db::DbError::NotFound => Self::UserNotFound,
            other => {
                tracing::error!("Database error: {}", other);
                Self::Database(other.to_string())
            }
        }
    }
}
