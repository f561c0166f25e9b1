use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// Network-level failure that could succeed if attempted again.
    #[error("Transient failure: {0}")]
    Transient(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RepositoryError {
    /// Returns `true` for failures a caller may retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_) | Self::Timeout(_))
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl<T> From<std::sync::PoisonError<T>> for RepositoryError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        RepositoryError::Unexpected(format!("Fixture store lock poisoned: {err}"))
    }
}
