use crate::{
    domain::{
        drag::{DragSession, DragSubject},
        item::{Item, ItemId},
        lane::{Lane, LaneId},
        reorder,
    },
    error::{Result, SlateError},
};
use serde::{Deserialize, Serialize};

/// Board state: the lane and item sequences plus the transient drag
/// session.
///
/// Lanes are an ordered sequence; items live in one flat ordered
/// sequence whose per-lane subsequences (filtered by `lane_id`) are the
/// member sequences the presentation layer displays. Sequence position
/// is the sole source of display order.
///
/// All mutation goes through the methods here. That single entry point
/// is what keeps the cross-invariant enforceable: an active drag
/// session only ever references entities that still exist, and deleting
/// a referenced entity cancels the session in the same call.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Board {
    lanes: Vec<Lane>,
    items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    drag: Option<DragSession>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            lanes: Vec::new(),
            items: Vec::new(),
            drag: None,
        }
    }

    /// Ordered lane sequence
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Flat item sequence, in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Ordered members of one lane
    pub fn lane_items(&self, lane_id: LaneId) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.lane_id == lane_id)
            .collect()
    }

    pub fn find_lane(&self, id: LaneId) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.id == id)
    }

    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Current drag session, if one is active
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// True while the given entity is the active drag subject.
    ///
    /// The presentation layer renders a placeholder in place of the
    /// real element while this holds.
    pub fn is_dragging(&self, subject: DragSubject) -> bool {
        self.drag
            .map(|session| session.subject == subject)
            .unwrap_or(false)
    }

    fn lane_index(&self, id: LaneId) -> Option<usize> {
        self.lanes.iter().position(|lane| lane.id == id)
    }

    fn item_index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn ensure_exists(&self, entity: DragSubject) -> Result<()> {
        match entity {
            DragSubject::Lane(id) => self
                .find_lane(id)
                .map(|_| ())
                .ok_or(SlateError::LaneNotFound(id)),
            DragSubject::Item(id) => self
                .find_item(id)
                .map(|_| ())
                .ok_or(SlateError::ItemNotFound(id)),
        }
    }

    /// Appends a new lane to the end of the lane sequence
    pub fn create_lane(&mut self, title: String) -> LaneId {
        let lane = Lane::new(title);
        let id = lane.id;
        self.lanes.push(lane);
        id
    }

    /// Replaces a lane's title in place
    pub fn rename_lane(&mut self, id: LaneId, title: String) -> Result<()> {
        let lane = self
            .lanes
            .iter_mut()
            .find(|lane| lane.id == id)
            .ok_or(SlateError::LaneNotFound(id))?;
        lane.set_title(title);
        Ok(())
    }

    /// Removes a lane and, atomically, every item that belongs to it.
    ///
    /// If the active drag session references the lane or any removed
    /// item, the session is cancelled as part of this call.
    pub fn delete_lane(&mut self, id: LaneId) -> Result<()> {
        let index = self.lane_index(id).ok_or(SlateError::LaneNotFound(id))?;
        self.lanes.remove(index);

        let removed_items: Vec<ItemId> = self
            .items
            .iter()
            .filter(|item| item.lane_id == id)
            .map(|item| item.id)
            .collect();
        self.items.retain(|item| item.lane_id != id);

        if let Some(session) = self.drag {
            let stale = session.references(DragSubject::Lane(id))
                || removed_items
                    .iter()
                    .any(|item_id| session.references(DragSubject::Item(*item_id)));
            if stale {
                self.drag = None;
            }
        }
        Ok(())
    }

    /// Appends a new item to the end of the lane's member sequence
    pub fn create_item(&mut self, lane_id: LaneId, content: String) -> Result<ItemId> {
        if self.find_lane(lane_id).is_none() {
            return Err(SlateError::LaneNotFound(lane_id));
        }

        let item = Item::new(lane_id, content);
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    /// Replaces an item's content in place
    pub fn update_item_content(&mut self, id: ItemId, content: String) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(SlateError::ItemNotFound(id))?;
        item.set_content(content);
        Ok(())
    }

    /// Removes an item from its lane's sequence.
    ///
    /// If the active drag session references the item, the session is
    /// cancelled as part of this call.
    pub fn delete_item(&mut self, id: ItemId) -> Result<()> {
        let index = self.item_index(id).ok_or(SlateError::ItemNotFound(id))?;
        self.items.remove(index);

        if let Some(session) = self.drag {
            if session.references(DragSubject::Item(id)) {
                self.drag = None;
            }
        }
        Ok(())
    }

    /// Moves the lane at `from_index` to `to_index`, shifting the lanes
    /// in between by one
    pub fn reorder_lanes(&mut self, from_index: usize, to_index: usize) {
        reorder::array_move(&mut self.lanes, from_index, to_index);
    }

    /// Relocates an item to `target_index` within the target lane's
    /// member sequence, reassigning its `lane_id`.
    ///
    /// `target_index` counts positions in the destination lane after
    /// the item has been lifted out of its current slot, which gives
    /// array-move semantics for same-lane moves. An index at or past
    /// the member count appends to the lane's end.
    pub fn move_item(
        &mut self,
        item_id: ItemId,
        target_lane_id: LaneId,
        target_index: usize,
    ) -> Result<()> {
        let item_index = self
            .item_index(item_id)
            .ok_or(SlateError::ItemNotFound(item_id))?;
        if self.find_lane(target_lane_id).is_none() {
            return Err(SlateError::LaneNotFound(target_lane_id));
        }

        let mut item = self.items.remove(item_index);
        let member_positions: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.lane_id == target_lane_id)
            .map(|(position, _)| position)
            .collect();
        let insert_at =
            reorder::lane_insertion_index(&member_positions, target_index, self.items.len());

        item.lane_id = target_lane_id;
        self.items.insert(insert_at, item);
        Ok(())
    }

    /// Starts a drag session for the given subject.
    ///
    /// Rejected while another session is active; at most one drag
    /// exists at a time. The subject must exist in the store.
    pub fn drag_start(&mut self, subject: DragSubject) -> Result<()> {
        if self.drag.is_some() {
            return Err(SlateError::DragInProgress);
        }
        self.ensure_exists(subject)?;

        self.drag = Some(DragSession::new(subject));
        Ok(())
    }

    /// Records the entity the pointer currently hovers (`None` for
    /// empty space).
    ///
    /// While an item is being dragged, a changed hover target relocates
    /// the item immediately, so the board reflows live during the drag
    /// rather than only on release. A hover target that no longer
    /// exists cancels the session.
    pub fn drag_over(&mut self, over: Option<DragSubject>) -> Result<()> {
        let session = self.drag.ok_or(SlateError::NoActiveDrag)?;
        if session.over == over {
            return Ok(());
        }

        if let Some(target) = over {
            if self.ensure_exists(target).is_err() {
                self.drag = None;
                return Ok(());
            }
        }

        self.drag = Some(DragSession {
            subject: session.subject,
            over,
        });

        let item_id = match session.subject {
            DragSubject::Item(id) => id,
            // Lane reorders commit on drop, not while hovering.
            DragSubject::Lane(_) => return Ok(()),
        };
        let target = match over {
            Some(target) if target != session.subject => target,
            _ => return Ok(()),
        };

        match target {
            DragSubject::Item(over_id) => self.relocate_over_item(item_id, over_id),
            DragSubject::Lane(lane_id) => {
                let member_count = self.lane_items(lane_id).len();
                self.move_item(item_id, lane_id, member_count)
            }
        }
    }

    /// Item-over-item relocation: the hovered item's position within
    /// its lane, taken before the move, becomes the target index. This
    /// is array-move within one lane and insert-before-the-target
    /// across lanes.
    fn relocate_over_item(&mut self, item_id: ItemId, over_id: ItemId) -> Result<()> {
        let target_lane_id = self
            .find_item(over_id)
            .ok_or(SlateError::ItemNotFound(over_id))?
            .lane_id;
        let target_index = self
            .lane_items(target_lane_id)
            .iter()
            .position(|item| item.id == over_id)
            .ok_or(SlateError::ItemNotFound(over_id))?;

        self.move_item(item_id, target_lane_id, target_index)
    }

    /// Ends the active drag, committing against the last hover target.
    ///
    /// A lane drag reorders the lane sequence here; an item drag was
    /// already relocated by the hover transitions, so ending the
    /// session accepts the provisional position. The session returns to
    /// idle either way.
    pub fn drag_end(&mut self) -> Result<()> {
        let session = self.drag.take().ok_or(SlateError::NoActiveDrag)?;

        let (active_id, over_id) = match (session.subject, session.over) {
            (DragSubject::Lane(active), Some(DragSubject::Lane(over))) => (active, over),
            _ => return Ok(()),
        };
        if active_id == over_id {
            return Ok(());
        }

        // A lane deleted mid-drag cancels the session, so these lookups
        // only fail for events arriving out of order; the move is
        // silently dropped either way.
        let from_index = match self.lane_index(active_id) {
            Some(index) => index,
            None => return Ok(()),
        };
        let to_index = match self.lane_index(over_id) {
            Some(index) => index,
            None => return Ok(()),
        };

        self.reorder_lanes(from_index, to_index);
        Ok(())
    }

    /// Discards the active drag without further reordering.
    ///
    /// Relocations already applied by hover transitions stay in place;
    /// there is no snapshot to restore.
    pub fn drag_cancel(&mut self) -> Result<()> {
        if self.drag.take().is_none() {
            return Err(SlateError::NoActiveDrag);
        }
        Ok(())
    }
}
