//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.

mod item_repository;

pub use item_repository::InMemoryItemRepository;
