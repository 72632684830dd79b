//! Value objects representing immutable domain concepts

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item identifier
///
/// Opaque to callers. The in-memory store generates decimal sequence
/// numbers, but explicit ids of any shape are accepted on create.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create from string representation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create from a store sequence number
    pub fn from_sequence(seq: u64) -> Self {
        Self(seq.to_string())
    }

    /// Parse the id back into a sequence number, if it is one
    pub fn as_sequence(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id means "unassigned"
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_formats_as_decimal() {
        let id = ItemId::from_sequence(17);
        assert_eq!(id.as_str(), "17");
        assert_eq!(id.as_sequence(), Some(17));
    }

    #[test]
    fn test_non_numeric_id_has_no_sequence() {
        assert_eq!(ItemId::new("abc").as_sequence(), None);
        assert!(ItemId::new("").is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }
}
