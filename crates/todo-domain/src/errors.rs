//! Domain errors for the todo service

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{reason}")]
    ValidationError { field: String, reason: String },

    /// Reserved for backends that can fail; the in-memory store never does.
    #[error("Internal error: {reason}")]
    Internal { reason: String },
}

impl DomainError {
    /// Create a not found error for an item id
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "item".to_string(),
            id: id.into(),
        }
    }

    /// Whether this error means the requested entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
