//! Item Application Service
//!
//! Orchestrates item use cases over an injected repository.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use todo_domain::entities::{Item, NewItem};
use todo_domain::repositories::ItemRepository;
use todo_domain::value_objects::ItemId;

use crate::errors::ApplicationResult;

/// Item Application Service
///
/// Stateless: all mutable state lives in the repository. Each method is at
/// most two independent repository calls; no lock is held between them.
#[derive(Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
}

impl ItemService {
    /// Create a new ItemService with an injected repository
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    /// Create a new open item
    pub async fn create(&self, title: impl Into<String>) -> ApplicationResult<Item> {
        let candidate = NewItem::new(title).with_created_at(Utc::now());

        if let Err(err) = candidate.validate() {
            warn!(error = %err, "rejected item create");
            return Err(err.into());
        }

        let item = self.repository.create(candidate).await?;
        info!(item_id = %item.id(), "item created");
        Ok(item)
    }

    /// Get item by ID
    pub async fn get(&self, id: &str) -> ApplicationResult<Item> {
        Ok(self.repository.get_by_id(&ItemId::new(id)).await?)
    }

    /// List all items
    pub async fn list(&self) -> ApplicationResult<Vec<Item>> {
        Ok(self.repository.list().await?)
    }

    /// Replace title and completion flag of an existing item
    ///
    /// A concurrent update between the read and the write is overwritten
    /// (last writer wins); a concurrent delete makes the write fail with
    /// `ItemNotFound` rather than resurrecting the item.
    pub async fn update(
        &self,
        id: &str,
        title: impl Into<String>,
        completed: bool,
    ) -> ApplicationResult<Item> {
        let mut item = self.repository.get_by_id(&ItemId::new(id)).await?;
        item.apply_changes(title, completed);

        if let Err(err) = item.validate() {
            warn!(item_id = %item.id(), error = %err, "rejected item update");
            return Err(err.into());
        }

        let item = self.repository.update(item).await?;
        info!(item_id = %item.id(), completed = item.is_completed(), "item updated");
        Ok(item)
    }

    /// Delete item by ID
    pub async fn delete(&self, id: &str) -> ApplicationResult<()> {
        self.repository.delete(&ItemId::new(id)).await?;
        info!(item_id = %id, "item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApplicationError;
    use todo_persistence::InMemoryItemRepository;

    fn service() -> ItemService {
        ItemService::new(Arc::new(InMemoryItemRepository::new()))
    }

    #[tokio::test]
    async fn test_create_defaults_to_open() {
        let svc = service();

        let item = svc.create("Buy milk").await.unwrap();
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.is_completed());
        assert!(!item.id().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let svc = service();

        let err = svc.create("").await.unwrap_err();
        assert_eq!(err, ApplicationError::ValidationFailed("title is required".into()));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_roundtrip() {
        let svc = service();
        let created = svc.create("Walk dog").await.unwrap();

        let found = svc.get(created.id().as_str()).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let svc = service();
        let created = svc.create("draft").await.unwrap();

        let updated = svc.update(created.id().as_str(), "final", true).await.unwrap();
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.created_at(), created.created_at());
        assert_eq!(updated.title(), "final");
        assert!(updated.is_completed());
    }

    #[tokio::test]
    async fn test_update_rejects_empty_title_without_writing() {
        let svc = service();
        let created = svc.create("keep me").await.unwrap();

        let err = svc.update(created.id().as_str(), "", true).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));

        let found = svc.get(created.id().as_str()).await.unwrap();
        assert_eq!(found.title(), "keep me");
        assert!(!found.is_completed());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let svc = service();

        let err = svc.update("99", "x", false).await.unwrap_err();
        assert_eq!(err, ApplicationError::ItemNotFound("99".into()));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let svc = service();
        let created = svc.create("once").await.unwrap();

        svc.delete(created.id().as_str()).await.unwrap();
        let err = svc.delete(created.id().as_str()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
