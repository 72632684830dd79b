//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use todo_domain::Item;

/// Todo creation request
///
/// A missing `title` decodes as empty and is rejected by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    /// Todo title
    #[serde(default)]
    pub title: String,
}

/// Todo update request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// New title
    #[serde(default)]
    pub title: String,
    /// New completion flag
    #[serde(default)]
    pub completed: bool,
}

/// Todo response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Todo ID
    pub id: String,
    /// Title
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Item> for TodoResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().to_string(),
            completed: item.is_completed(),
            created_at: item.created_at(),
        }
    }
}
