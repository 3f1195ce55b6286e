//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::UserRow;

/// User repository trait
///
/// The email column carries the storage layer's uniqueness constraint;
/// `create` surfaces a violation as [`crate::DbError::Duplicate`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by email (the login handle)
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Replace the stored password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> DbResult<()>;

    /// Delete a user
    async fn delete(&self, id: Uuid) -> DbResult<()>;
}

/// Create user input
///
/// Callers hash the password before the record reaches the store; there is
/// no plaintext field to persist.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}
