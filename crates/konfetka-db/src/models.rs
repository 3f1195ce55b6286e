//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User row from the database
///
/// `password_hash` is a PHC-format string; no plaintext password ever
/// appears on a persisted type.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> konfetka_types::UserId {
        konfetka_types::UserId(self.id)
    }
}
