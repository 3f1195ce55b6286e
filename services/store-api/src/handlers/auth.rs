//! Authentication handlers (login, logout, current user)

use axum::extract::State;
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use konfetka_auth_core::{SessionToken, SESSION_COOKIE, SESSION_SIG_COOKIE};
use konfetka_db::UserRow;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// The login handle is the account email
    pub username: String,
    pub password: String,
}

/// Public view of a user; the password hash never leaves the server
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

impl From<&UserRow> for UserInfo {
    fn from(user: &UserRow) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

/// POST /api/v1/auth/login
///
/// Verify credentials and set the session cookie pair.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let (user, token) = state.auth.login(&req.username, &req.password).await?;

    Ok((
        StatusCode::OK,
        set_session_cookies(&token),
        Json(UserInfo::from(&user)),
    ))
}

/// GET /api/v1/auth/logout
///
/// Instruct the client to drop the session cookies. Sessions are
/// stateless, so this is the whole of revocation.
pub async fn logout(_auth: AuthUser) -> impl IntoResponse {
    (
        StatusCode::OK,
        clear_session_cookies(),
        Json(MessageBody {
            message: "Logged out",
        }),
    )
}

/// GET /api/v1/auth/user
///
/// Resolve the session subject and return the public user fields.
pub async fn user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserInfo>> {
    let user = state.auth.current_user(auth.user_id).await?;
    Ok(Json(UserInfo::from(&user)))
}

/// Build the `Set-Cookie` pair for a freshly minted session
fn set_session_cookies(token: &SessionToken) -> AppendHeaders<[(HeaderName, String); 2]> {
    let expires = token.expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
    AppendHeaders([
        (
            header::SET_COOKIE,
            format!(
                "{SESSION_COOKIE}={}; path=/; expires={expires}; httponly",
                token.payload
            ),
        ),
        (
            header::SET_COOKIE,
            format!(
                "{SESSION_SIG_COOKIE}={}; path=/; expires={expires}; httponly",
                token.signature
            ),
        ),
    ])
}

/// Build the `Set-Cookie` pair that overwrites and expires both cookies
fn clear_session_cookies() -> AppendHeaders<[(HeaderName, String); 2]> {
    const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";
    AppendHeaders([
        (
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; path=/; expires={EPOCH}; httponly"),
        ),
        (
            header::SET_COOKIE,
            format!("{SESSION_SIG_COOKIE}=; path=/; expires={EPOCH}; httponly"),
        ),
    ])
}
