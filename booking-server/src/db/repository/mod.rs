//! Repository Module
//!
//! CRUD-style queries over the SQLite pool, one module per table. Repositories
//! are free functions taking `&SqlitePool`; the transactional booking write
//! lives in [`crate::booking`] because it is domain logic, not plain CRUD.

pub mod appointment;
pub mod branch;
pub mod branch_table_type;
pub mod brand;
pub mod employee_branch;
pub mod table_type;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".to_string()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for shared::AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => shared::AppError::not_found(msg),
            RepoError::Conflict(msg) => {
                shared::AppError::with_message(shared::ErrorCode::AlreadyExists, msg)
            }
            RepoError::Database(msg) => shared::AppError::database(msg),
            RepoError::Validation(msg) => shared::AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
