//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Uniqueness constraint violation (duplicate email)
    #[error("duplicate key")]
    Duplicate,

    /// Record not found
    #[error("record not found")]
    NotFound,

    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        // Postgres reports unique violations as SQLSTATE 23505; sqlx exposes
        // the check portably.
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return Self::Duplicate;
            }
        }
        Self::Sqlx(err)
    }
}

/// Result alias for database operations
pub type DbResult<T> = Result<T, DbError>;
