//! Mock repositories for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use konfetka_db::{CreateUser, DbError, DbResult, UserRepository, UserRow};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory user repository for testing
///
/// Mirrors the storage layer's email uniqueness semantics so duplicate
/// registration behaves like it does against Postgres.
#[derive(Default, Clone)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a test user directly
    #[allow(dead_code)]
    pub fn insert_user(&self, user: UserRow) {
        self.by_email.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_user_repo_crud() {
        let repo = MemoryUserRepository::new();

        let user = repo
            .create(CreateUser {
                id: Uuid::new_v4(),
                email: "test@example.com".to_string(),
                full_name: "Test User".to_string(),
                password_hash: "$argon2id$fake".to_string(),
            })
            .await
            .unwrap();

        let found = repo.find_by_id(user.id).await.unwrap();
        assert_eq!(found.unwrap().email, "test@example.com");

        let found = repo.find_by_email("test@example.com").await.unwrap();
        assert!(found.is_some());

        repo.update_password(user.id, "$argon2id$other").await.unwrap();
        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.password_hash, "$argon2id$other");

        repo.delete(user.id).await.unwrap();
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
        assert!(repo.find_by_email("test@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_user_repo_duplicate_email() {
        let repo = MemoryUserRepository::new();

        let make = || CreateUser {
            id: Uuid::new_v4(),
            email: "dup@example.com".to_string(),
            full_name: "Dup".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        };

        repo.create(make()).await.unwrap();
        let result = repo.create(make()).await;
        assert!(matches!(result, Err(DbError::Duplicate)));
    }
}
