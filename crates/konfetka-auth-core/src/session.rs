//! Stateless session cookies with HMAC signing
//!
//! A session travels as two cookie values: the payload (base64url JSON)
//! and a signature over it. The server keeps no session state; whatever
//! arrives is trusted only after the signature checks out.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use konfetka_types::UserId;
use serde::{Deserialize, Serialize};

use crate::crypto::{constant_time_eq, HmacKey};
use crate::AuthError;

/// Name of the payload cookie
pub const SESSION_COOKIE: &str = "session";

/// Name of the signature cookie
pub const SESSION_SIG_COOKIE: &str = "session.sig";

/// Session cookie payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Subject user ID
    pub user_id: String,
    /// Issue timestamp (milliseconds)
    pub issued: i64,
    /// Expiration timestamp (milliseconds)
    pub expires: i64,
}

impl SessionPayload {
    /// Create a new session payload expiring `ttl_days` from now
    pub fn new(user_id: UserId, ttl_days: u32) -> Self {
        let now = Utc::now().timestamp_millis();
        let expires = now + i64::from(ttl_days) * 24 * 60 * 60 * 1000;

        Self {
            user_id: user_id.to_string(),
            issued: now,
            expires,
        }
    }

    /// Check if the session is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires
    }

    /// Get the subject user ID
    pub fn user_id(&self) -> Option<UserId> {
        UserId::parse(&self.user_id).ok()
    }
}

/// A minted session ready to be set as cookies
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// Value for the `session` cookie (base64url JSON payload)
    pub payload: String,
    /// Value for the `session.sig` cookie
    pub signature: String,
    /// Expiry instant, for the cookie `expires` attribute
    pub expires_at: DateTime<Utc>,
}

/// Mints and validates signed session cookie pairs
#[derive(Clone)]
pub struct SessionCodec {
    hmac_key: HmacKey,
    ttl_days: u32,
}

impl SessionCodec {
    /// Create a new codec
    ///
    /// # Panics
    /// Panics if the secret is shorter than 32 bytes.
    pub fn new(secret: impl AsRef<[u8]>, ttl_days: u32) -> Self {
        let hmac_key = HmacKey::new(secret).expect("session secret must be at least 32 bytes");
        Self { hmac_key, ttl_days }
    }

    /// Mint a session for the given subject
    pub fn mint(&self, user_id: UserId) -> Result<SessionToken, AuthError> {
        let payload = SessionPayload::new(user_id, self.ttl_days);

        let payload_json = serde_json::to_vec(&payload).map_err(|e| {
            tracing::error!("Failed to serialize session payload: {}", e);
            AuthError::Internal("failed to create session".to_string())
        })?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload_json);
        let signature = self.compute_signature(&payload_b64);

        let expires_at = DateTime::<Utc>::from_timestamp_millis(payload.expires)
            .ok_or_else(|| AuthError::Internal("session expiry out of range".to_string()))?;

        Ok(SessionToken {
            payload: payload_b64,
            signature,
            expires_at,
        })
    }

    /// Validate a received cookie pair and return the payload
    ///
    /// The signature is recomputed and compared before the payload is
    /// decoded; the embedded expiration is only trusted after that.
    pub fn validate(&self, payload_b64: &str, signature: &str) -> Result<SessionPayload, AuthError> {
        let expected_sig = self.compute_signature(payload_b64);
        if !constant_time_eq(signature.as_bytes(), expected_sig.as_bytes()) {
            tracing::debug!("Session signature mismatch");
            return Err(AuthError::InvalidSession);
        }

        let payload_json = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::InvalidSession)?;

        let payload: SessionPayload =
            serde_json::from_slice(&payload_json).map_err(|_| AuthError::InvalidSession)?;

        if payload.is_expired() {
            return Err(AuthError::SessionExpired);
        }

        Ok(payload)
    }

    /// Compute the HMAC-SHA256 signature over `session=<payload>`
    ///
    /// Binding the cookie name means a signature cannot be replayed for a
    /// differently-named cookie.
    fn compute_signature(&self, payload_b64: &str) -> String {
        let data = format!("{SESSION_COOKIE}={payload_b64}");
        let signature = self.hmac_key.sign(data.as_bytes());
        URL_SAFE_NO_PAD.encode(signature)
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("ttl_days", &self.ttl_days)
            .finish_non_exhaustive()
    }
}
