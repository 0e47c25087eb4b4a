use crate::domain::{item::ItemId, lane::LaneId};
use serde::{Deserialize, Serialize};

/// A lane or item participating in a drag, tagged by kind.
///
/// Used both for the entity being dragged and for whatever the pointer
/// currently hovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragSubject {
    Lane(LaneId),
    Item(ItemId),
}

impl DragSubject {
    pub fn is_lane(&self) -> bool {
        matches!(self, Self::Lane(_))
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }
}

/// Transient record of an in-progress drag.
///
/// Exists only between drag-start and drag-end/cancel. `over` is `None`
/// while the pointer hovers empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub subject: DragSubject,
    pub over: Option<DragSubject>,
}

impl DragSession {
    /// Opens a session for the given subject with no hover target yet
    pub fn new(subject: DragSubject) -> Self {
        Self {
            subject,
            over: None,
        }
    }

    /// True if the session references the entity as its subject or as
    /// its current hover target
    pub fn references(&self, entity: DragSubject) -> bool {
        self.subject == entity || self.over == Some(entity)
    }
}
