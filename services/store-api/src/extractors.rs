//! Axum extractors for authentication
//!
//! [`AuthUser`] is the access guard: protected handlers take it as an
//! argument, and requests without a valid session cookie pair are
//! rejected before any handler logic runs.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};

use konfetka_auth_core::{SESSION_COOKIE, SESSION_SIG_COOKIE};
use konfetka_types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated session subject extracted from request cookies
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let (payload, signature) =
            session_cookies(&parts.headers).ok_or(ApiError::NotLoggedIn)?;

        let payload = app_state
            .auth
            .validate_session(&payload, &signature)
            .map_err(|e| {
                tracing::debug!(error = ?e, "Session validation failed");
                ApiError::NotLoggedIn
            })?;

        let user_id = payload.user_id().ok_or(ApiError::NotLoggedIn)?;

        Ok(AuthUser { user_id })
    }
}

/// Pull the `session` and `session.sig` cookie values out of the headers
fn session_cookies(headers: &HeaderMap) -> Option<(String, String)> {
    let mut payload = None;
    let mut signature = None;

    for cookie_header in headers.get_all(header::COOKIE) {
        let Ok(cookie_str) = cookie_header.to_str() else {
            continue;
        };
        for cookie in cookie_str.split(';') {
            let Some((name, value)) = cookie.trim().split_once('=') else {
                continue;
            };
            match name {
                SESSION_COOKIE => payload = Some(value.to_string()),
                SESSION_SIG_COOKIE => signature = Some(value.to_string()),
                _ => {}
            }
        }
    }

    Some((payload?, signature?))
}
