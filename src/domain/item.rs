use crate::domain::lane::LaneId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ItemId {
    type Err = crate::error::SlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| crate::error::SlateError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of work belonging to exactly one lane.
///
/// `lane_id` is reassigned when the item is relocated to another lane;
/// it must always reference a lane that currently exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub lane_id: LaneId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item attached to the given lane
    pub fn new(lane_id: LaneId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            lane_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the content in place
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display_and_parse_round_trip() {
        let id = ItemId::new();
        let parsed = ItemId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_item_id_rejects_malformed_input() {
        assert!(ItemId::from_str("INVALID").is_err());
    }

    #[test]
    fn test_item_creation() {
        let lane_id = LaneId::new();
        let item = Item::new(lane_id, "Write docs".to_string());

        assert_eq!(item.lane_id, lane_id);
        assert_eq!(item.content, "Write docs");
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_set_content_updates_updated_at() {
        let mut item = Item::new(LaneId::new(), "Write docs".to_string());
        let initial_updated_at = item.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        item.set_content("Write more docs".to_string());

        assert_eq!(item.content, "Write more docs");
        assert!(item.updated_at > initial_updated_at);
    }

    #[test]
    fn test_item_serialization_round_trip() {
        let item = Item::new(LaneId::new(), "Write docs".to_string());

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, item.id);
        assert_eq!(deserialized.lane_id, item.lane_id);
        assert_eq!(deserialized.content, item.content);
    }
}
