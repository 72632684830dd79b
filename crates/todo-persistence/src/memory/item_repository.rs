//! In-Memory Item Repository Implementation

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use todo_domain::{
    entities::{Item, NewItem},
    errors::{DomainError, DomainResult},
    repositories::ItemRepository,
    value_objects::ItemId,
};

/// Map and id counter, guarded together so that id generation and insertion
/// form one atomic step.
#[derive(Debug, Default)]
struct StoreState {
    items: HashMap<ItemId, Item>,
    last_seq: u64,
}

impl StoreState {
    fn next_id(&mut self) -> ItemId {
        self.last_seq += 1;
        ItemId::from_sequence(self.last_seq)
    }

    /// Keep the counter at or above every numeric id ever stored, so a
    /// generated id can never collide with one, present or deleted.
    fn observe(&mut self, id: &ItemId) {
        if let Some(seq) = id.as_sequence() {
            self.last_seq = self.last_seq.max(seq);
        }
    }
}

/// Thread-safe in-memory implementation of ItemRepository
///
/// Uses RwLock for concurrent read access with exclusive write access.
/// Stores cloned Item instances so callers never alias stored state. The
/// guard is dropped before every return and never held across an await.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    state: RwLock<StoreState>,
}

impl InMemoryItemRepository {
    /// Create a new empty in-memory item repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial items (useful for testing)
    ///
    /// The id counter starts past the largest numeric seeded id.
    pub fn with_items(items: Vec<Item>) -> Self {
        let last_seq = items
            .iter()
            .filter_map(|item| item.id().as_sequence())
            .max()
            .unwrap_or(0);
        let items = items
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();

        Self {
            state: RwLock::new(StoreState { items, last_seq }),
        }
    }

    /// Get the current count of items (for testing)
    pub fn count(&self) -> usize {
        self.state.read().items.len()
    }

    /// Clear all items (for testing)
    ///
    /// The id counter is kept, so ids are still never reused.
    pub fn clear(&self) {
        self.state.write().items.clear();
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: NewItem) -> DomainResult<Item> {
        let mut state = self.state.write();

        let id = match item.explicit_id() {
            Some(id) => {
                state.observe(id);
                id.clone()
            }
            None => state.next_id(),
        };
        let created_at = item.created_at.unwrap_or_else(Utc::now);
        let stored = item.into_item(id.clone(), created_at);

        if state.items.insert(id.clone(), stored.clone()).is_some() {
            debug!(item_id = %id, "explicit id replaced an existing item");
        }
        debug!(item_id = %id, "item created");

        Ok(stored)
    }

    async fn get_by_id(&self, id: &ItemId) -> DomainResult<Item> {
        let state = self.state.read();
        state
            .items
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::item_not_found(id.as_str()))
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        let state = self.state.read();
        Ok(state.items.values().cloned().collect())
    }

    async fn update(&self, item: Item) -> DomainResult<Item> {
        let mut state = self.state.write();

        match state.items.get_mut(item.id()) {
            Some(slot) => {
                *slot = item.clone();
                debug!(item_id = %item.id(), "item updated");
                Ok(item)
            }
            None => Err(DomainError::item_not_found(item.id().as_str())),
        }
    }

    async fn delete(&self, id: &ItemId) -> DomainResult<()> {
        let mut state = self.state.write();

        match state.items.remove(id) {
            Some(_) => {
                debug!(item_id = %id, "item deleted");
                Ok(())
            }
            None => Err(DomainError::item_not_found(id.as_str())),
        }
    }
}
