use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaneId(Uuid);

impl LaneId {
    /// Creates a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LaneId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for LaneId {
    type Err = crate::error::SlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| crate::error::SlateError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named ordered container of items (a board column).
///
/// A lane owns no items directly; membership is derived from
/// [`Item::lane_id`](crate::domain::Item).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    pub id: LaneId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lane {
    /// Creates a new lane with the given title
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: LaneId::new(),
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the title in place
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_id_uniqueness() {
        let a = LaneId::new();
        let b = LaneId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_lane_id_display_and_parse_round_trip() {
        let id = LaneId::new();
        let parsed = LaneId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_lane_id_rejects_malformed_input() {
        assert!(LaneId::from_str("not-a-uuid").is_err());
        assert!(LaneId::from_str("").is_err());
    }

    #[test]
    fn test_lane_creation() {
        let lane = Lane::new("Todo".to_string());
        assert_eq!(lane.title, "Todo");
        assert_eq!(lane.created_at, lane.updated_at);
    }

    #[test]
    fn test_set_title_updates_updated_at() {
        let mut lane = Lane::new("Todo".to_string());
        let initial_updated_at = lane.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        lane.set_title("Doing".to_string());

        assert_eq!(lane.title, "Doing");
        assert!(lane.updated_at > initial_updated_at);
    }
}
