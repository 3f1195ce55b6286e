//! User registration handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use konfetka_auth_core::NewUser;
use serde::Deserialize;

use super::UserInfo;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// POST /api/v1/users
///
/// Create an account. The password is hashed before it reaches storage;
/// a taken email surfaces as 409.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let user = state
        .auth
        .register(NewUser {
            email: req.email,
            full_name: req.full_name,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserInfo::from(&user))))
}
