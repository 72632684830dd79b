//! Application state for the API server

use std::sync::Arc;

use todo_application::ItemService;
use todo_domain::ItemRepository;
use todo_persistence::InMemoryItemRepository;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Item use cases
    pub items: Arc<ItemService>,
}

impl AppState {
    /// Create state around an existing service
    pub fn new(items: ItemService) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// State backed by the given repository
    pub fn with_repository(repository: Arc<dyn ItemRepository>) -> Self {
        Self::new(ItemService::new(repository))
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryItemRepository::new()))
    }
}
