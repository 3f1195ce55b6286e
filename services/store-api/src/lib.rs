//! Konfetka Store API
//!
//! REST backend for the store frontend. Authentication is cookie-based:
//! login mints a signed `session` + `session.sig` pair, protected routes
//! validate it on every request.

use axum::routing::{get, post};
use axum::Router;

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod state;

use state::AppState;

/// Build the API router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health))
        .route("/api/v1/auth/login", post(handlers::login))
        .route("/api/v1/auth/logout", get(handlers::logout))
        .route("/api/v1/auth/user", get(handlers::user))
        .route("/api/v1/users", post(handlers::register))
        .with_state(state)
}
