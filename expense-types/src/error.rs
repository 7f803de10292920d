//! Error types for the expense tracker.

use crate::domain::CategoryId;

/// Domain-level errors (validation failures).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("expenditure description cannot be empty")]
    DescriptionEmpty,

    #[error("invalid expenditure amount")]
    InvalidAmount,

    #[error("expenditure date cannot be in the future")]
    FutureDate,

    #[error("expenditure category cannot be empty")]
    CategoryEmpty,

    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("category name cannot be empty")]
    CategoryNameEmpty,

    #[error("category color cannot be empty")]
    CategoryColorEmpty,
}

/// Repository-level errors.
///
/// `NotFound` and `AlreadyExists` are the sentinel failures shared by every
/// store, so callers never need to know which backend produced them.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Entity already exists")]
    AlreadyExists,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            // Ids are server-generated, so a collision is unexpected.
            RepoError::AlreadyExists => AppError::Internal("Resource already exists".into()),
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}
