//! Repository Contract Tests
//!
//! Behavioural contract every `ItemRepository` implementation must satisfy.
//! A backend that passes `run_item_repository_contracts` is substitutable
//! for the in-memory store without touching services or handlers.
//!
//! ## Contract Properties
//!
//! 1. **Create-Get Roundtrip**: create(candidate) → get_by_id(id) returns the stored item
//! 2. **Missing Is NotFound**: get/update/delete of an unknown id fail with `NotFound`
//! 3. **Unique Ids**: creates without an explicit id never share an id
//! 4. **Update Replaces**: update(item) → get_by_id(id) returns the new values
//! 5. **Delete Rejects Repeats**: the second delete of an id fails with `NotFound`
//! 6. **List Contains Created**: create(candidate) → list() contains the item

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use todo_domain::{DomainError, Item, ItemId, ItemRepository, NewItem};
use todo_persistence::InMemoryItemRepository;

// ============================================================================
// Contract Harness
// ============================================================================

async fn contract_create_get_roundtrip(repo: &dyn ItemRepository) {
    let created = repo.create(NewItem::new("Buy milk")).await.unwrap();
    assert!(!created.id().is_empty());

    let found = repo.get_by_id(created.id()).await.unwrap();
    assert_eq!(found, created);
    assert!(!found.is_completed());
}

async fn contract_missing_is_not_found(repo: &dyn ItemRepository) {
    let missing = ItemId::new("does-not-exist");

    let err = repo.get_by_id(&missing).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let ghost = Item::new(missing.clone(), "ghost", false, chrono::Utc::now());
    assert!(repo.update(ghost).await.unwrap_err().is_not_found());
    assert!(repo.delete(&missing).await.unwrap_err().is_not_found());
}

async fn contract_unique_ids(repo: &dyn ItemRepository) {
    let mut ids = HashSet::new();
    for i in 0..25 {
        let item = repo.create(NewItem::new(format!("t{i}"))).await.unwrap();
        assert!(ids.insert(item.id().clone()), "duplicate id {}", item.id());
    }
}

async fn contract_update_replaces(repo: &dyn ItemRepository) {
    let mut item = repo.create(NewItem::new("draft")).await.unwrap();
    item.apply_changes("final", true);

    let updated = repo.update(item.clone()).await.unwrap();
    assert_eq!(updated, item);

    let found = repo.get_by_id(item.id()).await.unwrap();
    assert_eq!(found.title(), "final");
    assert!(found.is_completed());
}

async fn contract_delete_rejects_repeats(repo: &dyn ItemRepository) {
    let item = repo.create(NewItem::new("short-lived")).await.unwrap();

    repo.delete(item.id()).await.unwrap();
    assert!(repo.delete(item.id()).await.unwrap_err().is_not_found());
    assert!(repo.get_by_id(item.id()).await.unwrap_err().is_not_found());
}

async fn contract_list_contains_created(repo: &dyn ItemRepository) {
    let item = repo.create(NewItem::new("listed")).await.unwrap();
    let all = repo.list().await.unwrap();
    assert!(all.iter().any(|i| i.id() == item.id()));
}

/// Run all contract tests against an ItemRepository implementation
async fn run_item_repository_contracts(repo: &dyn ItemRepository) {
    contract_create_get_roundtrip(repo).await;
    contract_missing_is_not_found(repo).await;
    contract_unique_ids(repo).await;
    contract_update_replaces(repo).await;
    contract_delete_rejects_repeats(repo).await;
    contract_list_contains_created(repo).await;
}

#[tokio::test]
async fn in_memory_repository_satisfies_contracts() {
    let repo = InMemoryItemRepository::new();
    run_item_repository_contracts(&repo).await;
}

#[tokio::test]
async fn list_of_empty_repository_is_empty() {
    let repo = InMemoryItemRepository::new();
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_readers_and_writers_stay_consistent() {
    let repo: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());

    let writers: Vec<_> = (0..100)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                let item = repo.create(NewItem::new(format!("w{i}"))).await.unwrap();
                let found = repo.get_by_id(item.id()).await.unwrap();
                assert_eq!(found.id(), item.id());
                item
            })
        })
        .collect();
    let readers: Vec<_> = (0..50)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for item in repo.list().await.unwrap() {
                    assert!(!item.title().is_empty());
                }
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in writers {
        ids.insert(handle.await.unwrap().id().clone());
    }
    for handle in readers {
        handle.await.unwrap();
    }

    assert_eq!(ids.len(), 100);
    assert_eq!(repo.list().await.unwrap().len(), 100);
}

// ============================================================================
// Uniqueness Property
// ============================================================================

proptest! {
    /// Any sequence of creates with unset ids yields pairwise distinct ids
    #[test]
    fn generated_ids_are_unique(titles in prop::collection::vec(".{1,16}", 1..64)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let repo = InMemoryItemRepository::new();

        let ids: Vec<ItemId> = rt.block_on(async {
            let mut ids = Vec::new();
            for title in &titles {
                ids.push(repo.create(NewItem::new(title.clone())).await.unwrap().id().clone());
            }
            ids
        });

        let distinct: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(distinct.len(), titles.len());
    }
}
