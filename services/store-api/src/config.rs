//! Configuration for the store API service.

use konfetka_auth_core::AuthConfig;

/// Deployment environment, selects the CORS policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

/// Store API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// Deployment environment
    pub env: AppEnv,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Session secret (minimum 32 bytes)
        let session_secret =
            std::env::var("SESSION_SECRET").map_err(|_| ConfigError::Missing("SESSION_SECRET"))?;

        if session_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "SESSION_SECRET must be at least 32 characters",
            ));
        }

        // Session lifetime (default 30 days)
        let session_ttl_days: u32 = std::env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("SESSION_TTL_DAYS"))?;

        let env = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => AppEnv::Production,
            _ => AppEnv::Development,
        };

        let auth = AuthConfig::new(session_secret).with_session_ttl_days(session_ttl_days);

        Ok(Self {
            http_port,
            database_url,
            auth,
            env,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
