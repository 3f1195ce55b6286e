//! Configuration types for the auth service

/// Default session lifetime in days
pub const DEFAULT_SESSION_TTL_DAYS: u32 = 30;

/// Auth service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for session signing (at least 32 bytes)
    pub session_secret: String,
    /// Session lifetime in days
    pub session_ttl_days: u32,
}

impl AuthConfig {
    /// Create a new auth config with the default 30-day session lifetime
    pub fn new(session_secret: impl Into<String>) -> Self {
        Self {
            session_secret: session_secret.into(),
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
        }
    }

    /// Set the session lifetime
    pub fn with_session_ttl_days(mut self, days: u32) -> Self {
        self.session_ttl_days = days;
        self
    }
}
