//! List-screen services sitting between the HTTP layer and the data sources.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod attachments;
pub mod controller;
pub mod lists;
pub mod notices;
pub mod notification;

/// Failures surfaced by list controllers and services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to load {kind} list: {source}")]
    ReadFailure {
        kind: &'static str,
        source: RepositoryError,
    },

    #[error("failed to update {kind} {id}: {source}")]
    WriteFailure {
        kind: &'static str,
        id: String,
        source: RepositoryError,
    },

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint error: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
