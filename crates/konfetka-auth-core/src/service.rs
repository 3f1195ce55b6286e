//! Auth service - ties together credential checks and session minting

use std::sync::Arc;

use konfetka_db::{CreateUser, UserRepository, UserRow};
use konfetka_types::UserId;

use crate::config::AuthConfig;
use crate::password;
use crate::session::{SessionCodec, SessionPayload, SessionToken};
use crate::AuthError;

/// Registration input
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Authentication service
///
/// Orchestrates login (lookup, verify, mint) and resolves session subjects
/// back to user records. Session state lives entirely in the signed
/// cookies; the service holds only the credential store and the codec.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    codec: SessionCodec,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(config: AuthConfig, users: Arc<dyn UserRepository>) -> Self {
        Self {
            codec: SessionCodec::new(&config.session_secret, config.session_ttl_days),
            users,
        }
    }

    /// Verify credentials and mint a session.
    ///
    /// Unknown handle and wrong password are indistinguishable to the
    /// caller. The hash check runs on the blocking pool so it cannot stall
    /// unrelated requests.
    pub async fn login(
        &self,
        handle: &str,
        password: &str,
    ) -> Result<(UserRow, SessionToken), AuthError> {
        let user = self
            .users
            .find_by_email(handle)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify_blocking(password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.mint(user.user_id())?;
        Ok((user, token))
    }

    /// Validate a received session cookie pair
    pub fn validate_session(
        &self,
        payload: &str,
        signature: &str,
    ) -> Result<SessionPayload, AuthError> {
        self.codec.validate(payload, signature)
    }

    /// Resolve the session subject to a user record
    pub async fn current_user(&self, user_id: UserId) -> Result<UserRow, AuthError> {
        self.users
            .find_by_id(user_id.0)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Register a new user.
    ///
    /// The password is hashed before the record reaches the store; a
    /// duplicate email surfaces as [`AuthError::DuplicateEmail`].
    pub async fn register(&self, new_user: NewUser) -> Result<UserRow, AuthError> {
        let password_hash = self.hash_blocking(new_user.password).await?;

        let row = self
            .users
            .create(CreateUser {
                id: uuid::Uuid::new_v4(),
                email: new_user.email,
                full_name: new_user.full_name,
                password_hash,
            })
            .await?;

        Ok(row)
    }

    /// Change a user's password, recomputing the stored hash
    pub async fn set_password(&self, user_id: UserId, plain: &str) -> Result<(), AuthError> {
        let password_hash = self.hash_blocking(plain.to_string()).await?;
        self.users
            .update_password(user_id.0, &password_hash)
            .await?;
        Ok(())
    }

    async fn hash_blocking(&self, plain: String) -> Result<String, AuthError> {
        tokio::task::spawn_blocking(move || password::hash_password(&plain))
            .await
            .map_err(|e| AuthError::Internal(format!("hash task failed: {e}")))?
    }

    async fn verify_blocking(&self, plain: &str, hash: &str) -> Result<bool, AuthError> {
        let plain = plain.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || password::verify_password(&plain, &hash))
            .await
            .map_err(|e| AuthError::Internal(format!("verify task failed: {e}")))
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
