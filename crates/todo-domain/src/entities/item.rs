//! Todo item entity

use chrono::{DateTime, Utc};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::ItemId;

/// Reject empty titles.
///
/// Only the exact empty string is invalid; whitespace titles are kept as-is.
pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.is_empty() {
        return Err(DomainError::ValidationError {
            field: "title".to_string(),
            reason: "title is required".to_string(),
        });
    }
    Ok(())
}

/// A stored todo item
///
/// `id` and `created_at` are fixed once the item has been persisted;
/// only `title` and `completed` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Assemble an item from fully assigned parts
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            created_at,
        }
    }

    /// Get item ID
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Get title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the item is done
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Get created timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Overwrite the mutable fields, keeping identity and creation time
    pub fn apply_changes(&mut self, title: impl Into<String>, completed: bool) {
        self.title = title.into();
        self.completed = completed;
    }

    /// Check the title invariant
    pub fn validate(&self) -> DomainResult<()> {
        validate_title(&self.title)
    }
}

/// Candidate item handed to `ItemRepository::create`
///
/// `None` (or an empty id) asks the repository to assign the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub id: Option<ItemId>,
    pub title: String,
    pub completed: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewItem {
    /// Open, unassigned item with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            completed: false,
            created_at: None,
        }
    }

    /// Request an explicit id instead of a generated one
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Pin the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the initial completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Explicit id, ignoring the empty string
    pub fn explicit_id(&self) -> Option<&ItemId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }

    /// Check the title invariant
    pub fn validate(&self) -> DomainResult<()> {
        validate_title(&self.title)
    }

    /// Finish the candidate with the assigned id and timestamp
    pub fn into_item(self, id: ItemId, created_at: DateTime<Utc>) -> Item {
        Item {
            id,
            title: self.title,
            completed: self.completed,
            created_at,
        }
    }
}
