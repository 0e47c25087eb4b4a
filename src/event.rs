use crate::domain::{Board, DragSubject, ItemId, LaneId};
use serde::{Deserialize, Serialize};

/// Inbound event vocabulary of the presentation boundary.
///
/// The presentation layer forwards raw pointer and edit interactions as
/// these events and re-reads the board afterwards; it never mutates
/// state directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    CreateLane,
    RenameLane { id: LaneId, title: String },
    DeleteLane { id: LaneId },
    CreateItem { lane_id: LaneId },
    UpdateItem { id: ItemId, content: String },
    DeleteItem { id: ItemId },
    DragStart { subject: DragSubject },
    DragOver { over: Option<DragSubject> },
    DragEnd,
    DragCancel,
}

impl Board {
    /// Applies one presentation event.
    ///
    /// Events referencing ids absent from the store, drag-starts while
    /// a session is active, and drops without a session all degrade to
    /// no-ops: the presentation layer cannot construct an invalid id
    /// through normal interaction, so a failing event is stale rather
    /// than wrong, and there is nothing to surface.
    ///
    /// New lanes and items get numbered placeholder names; the user
    /// renames them through [`BoardEvent::RenameLane`] and
    /// [`BoardEvent::UpdateItem`].
    pub fn apply(&mut self, event: BoardEvent) {
        let result = match event {
            BoardEvent::CreateLane => {
                let title = format!("Lane {}", self.lanes().len() + 1);
                self.create_lane(title);
                Ok(())
            }
            BoardEvent::RenameLane { id, title } => self.rename_lane(id, title),
            BoardEvent::DeleteLane { id } => self.delete_lane(id),
            BoardEvent::CreateItem { lane_id } => {
                let content = format!("Item {}", self.items().len() + 1);
                self.create_item(lane_id, content).map(|_| ())
            }
            BoardEvent::UpdateItem { id, content } => self.update_item_content(id, content),
            BoardEvent::DeleteItem { id } => self.delete_item(id),
            BoardEvent::DragStart { subject } => self.drag_start(subject),
            BoardEvent::DragOver { over } => self.drag_over(over),
            BoardEvent::DragEnd => self.drag_end(),
            BoardEvent::DragCancel => self.drag_cancel(),
        };
        let _ = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_create_lane_numbers_titles() {
        let mut board = Board::new();
        board.apply(BoardEvent::CreateLane);
        board.apply(BoardEvent::CreateLane);

        let titles: Vec<&str> = board.lanes().iter().map(|lane| lane.title.as_str()).collect();
        assert_eq!(titles, vec!["Lane 1", "Lane 2"]);
    }

    #[test]
    fn test_apply_create_item_numbers_content() {
        let mut board = Board::new();
        board.apply(BoardEvent::CreateLane);
        let lane_id = board.lanes()[0].id;

        board.apply(BoardEvent::CreateItem { lane_id });
        board.apply(BoardEvent::CreateItem { lane_id });

        let contents: Vec<&str> = board
            .items()
            .iter()
            .map(|item| item.content.as_str())
            .collect();
        assert_eq!(contents, vec!["Item 1", "Item 2"]);
    }

    #[test]
    fn test_apply_stale_ids_leave_board_unchanged() {
        let mut board = Board::new();
        board.apply(BoardEvent::CreateLane);
        let before = serde_json::to_value(&board).unwrap();

        board.apply(BoardEvent::RenameLane {
            id: LaneId::new(),
            title: "ghost".to_string(),
        });
        board.apply(BoardEvent::DeleteLane { id: LaneId::new() });
        board.apply(BoardEvent::CreateItem {
            lane_id: LaneId::new(),
        });
        board.apply(BoardEvent::UpdateItem {
            id: ItemId::new(),
            content: "ghost".to_string(),
        });
        board.apply(BoardEvent::DeleteItem { id: ItemId::new() });

        assert_eq!(serde_json::to_value(&board).unwrap(), before);
    }

    #[test]
    fn test_apply_drag_events_without_session_are_ignored() {
        let mut board = Board::new();
        board.apply(BoardEvent::CreateLane);
        let before = serde_json::to_value(&board).unwrap();

        board.apply(BoardEvent::DragOver { over: None });
        board.apply(BoardEvent::DragEnd);
        board.apply(BoardEvent::DragCancel);

        assert_eq!(serde_json::to_value(&board).unwrap(), before);
        assert!(board.drag_session().is_none());
    }

    #[test]
    fn test_apply_second_drag_start_is_ignored() {
        let mut board = Board::new();
        board.apply(BoardEvent::CreateLane);
        board.apply(BoardEvent::CreateLane);
        let first = board.lanes()[0].id;
        let second = board.lanes()[1].id;

        board.apply(BoardEvent::DragStart {
            subject: DragSubject::Lane(first),
        });
        board.apply(BoardEvent::DragStart {
            subject: DragSubject::Lane(second),
        });

        assert_eq!(
            board.drag_session().unwrap().subject,
            DragSubject::Lane(first)
        );
    }

    #[test]
    fn test_apply_full_item_drag_lifecycle() {
        let mut board = Board::new();
        board.apply(BoardEvent::CreateLane);
        board.apply(BoardEvent::CreateLane);
        let source = board.lanes()[0].id;
        let destination = board.lanes()[1].id;
        board.apply(BoardEvent::CreateItem { lane_id: source });
        let item_id = board.items()[0].id;

        board.apply(BoardEvent::DragStart {
            subject: DragSubject::Item(item_id),
        });
        board.apply(BoardEvent::DragOver {
            over: Some(DragSubject::Lane(destination)),
        });
        board.apply(BoardEvent::DragEnd);

        assert!(board.drag_session().is_none());
        assert_eq!(board.find_item(item_id).unwrap().lane_id, destination);
    }

    #[test]
    fn test_event_serialization_is_type_tagged() {
        let json = serde_json::to_string(&BoardEvent::DragEnd).unwrap();
        assert_eq!(json, "{\"type\":\"drag_end\"}");

        let event: BoardEvent = serde_json::from_str("{\"type\":\"drag_cancel\"}").unwrap();
        assert_eq!(event, BoardEvent::DragCancel);
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = BoardEvent::RenameLane {
            id: LaneId::new(),
            title: "Doing".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: BoardEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, event);
    }
}
