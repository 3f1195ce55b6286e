//! Shared test fixtures: an in-memory user repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use konfetka_db::{CreateUser, DbError, DbResult, UserRepository, UserRow};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory user repository mirroring the storage layer's email
/// uniqueness semantics
#[derive(Default, Clone)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        if self.by_email.contains_key(&user.email) {
            return Err(DbError::Duplicate);
        }
        let row = UserRow {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name,
            password_hash: user.password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_email.insert(user.email, user.id);
        self.users.insert(user.id, row.clone());
        Ok(row)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.password_hash = password_hash.to_string();
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DbResult<()> {
        if let Some((_, user)) = self.users.remove(&id) {
            self.by_email.remove(&user.email);
        }
        Ok(())
    }
}
