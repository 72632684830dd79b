//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API consumption. They wrap domain errors with additional context.

use thiserror::Error;

use todo_domain::errors::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// Input validation failed
    #[error("{0}")]
    ValidationFailed(String),

    /// Item not found
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Storage backend failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error came from a missing item
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { id, .. } => ApplicationError::ItemNotFound(id),
            DomainError::ValidationError { reason, .. } => ApplicationError::ValidationFailed(reason),
            DomainError::Internal { reason } => ApplicationError::Internal(reason),
        }
    }
}
