//! Todo Domain Layer
//!
//! Entities, value objects and repository contracts for the todo service.
//! This crate defines interfaces only; storage lives in `todo-persistence`
//! and use-case orchestration in `todo-application`.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::{Item, NewItem};
pub use errors::{DomainError, DomainResult};
pub use repositories::ItemRepository;
pub use value_objects::ItemId;
