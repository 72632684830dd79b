//! Repository interfaces for item storage
//!
//! The domain layer defines only the contract. Implementations are provided
//! by infrastructure crates and injected into the application layer as
//! `Arc<dyn ItemRepository>`.

use async_trait::async_trait;

use crate::{
    entities::{Item, NewItem},
    errors::DomainResult,
    value_objects::ItemId,
};

/// Keyed storage for todo items
///
/// Implementations must be safe to share across request tasks. Every item
/// returned under a key carries that key as its id, and ids handed out by
/// `create` are never reused for the lifetime of the repository.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a candidate, assigning id and creation time when unset.
    ///
    /// An explicit id that is already present is overwritten.
    async fn create(&self, item: NewItem) -> DomainResult<Item>;

    /// Find item by ID, failing with `NotFound` when absent
    async fn get_by_id(&self, id: &ItemId) -> DomainResult<Item>;

    /// All stored items, in no particular order
    async fn list(&self) -> DomainResult<Vec<Item>>;

    /// Replace an existing item wholesale, failing with `NotFound` when absent
    async fn update(&self, item: Item) -> DomainResult<Item>;

    /// Remove item by ID, failing with `NotFound` when absent
    async fn delete(&self, id: &ItemId) -> DomainResult<()>;
}
