//! Error types for the store API.
//!
//! All failure bodies are flat `{"message": "..."}` objects; credential
//! failures share one message so callers cannot tell handle and password
//! errors apart.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use konfetka_auth_core::AuthError;
use serde::Serialize;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Error: Wrong email or password")]
    WrongCredentials,

    #[error("Error: Not logged in")]
    NotLoggedIn,

    #[error("Error: Email already registered")]
    DuplicateEmail,

    #[error("Error: {0}")]
    BadRequest(String),

    #[error("Error: Internal server error")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::WrongCredentials => StatusCode::UNAUTHORIZED,
            Self::NotLoggedIn => StatusCode::FORBIDDEN,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::WrongCredentials,
            // A missing, tampered, or expired session all read the same
            // from outside, as does a subject that no longer exists
            AuthError::InvalidSession | AuthError::SessionExpired | AuthError::UserNotFound => {
                Self::NotLoggedIn
            }
            AuthError::DuplicateEmail => Self::DuplicateEmail,
            AuthError::Database(msg) | AuthError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref detail) = self {
            tracing::error!(%detail, "Internal API error");
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
