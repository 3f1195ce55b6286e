//! Application state

use std::sync::Arc;

use konfetka_auth_core::AuthService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for credential checks and session cookies
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}
