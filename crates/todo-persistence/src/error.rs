//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use thiserror::Error;

use todo_domain::errors::DomainError;

/// Errors that can occur during persistence operations
///
/// The in-memory backend never produces these; they give durable backends
/// a place to report failures without changing the domain contract.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),
}

impl PersistenceError {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { entity_type, id } => DomainError::NotFound {
                entity_type: entity_type.to_string(),
                id,
            },
            other => DomainError::Internal {
                reason: other.to_string(),
            },
        }
    }
}
