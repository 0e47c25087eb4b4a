pub mod board;
pub mod drag;
pub mod item;
pub mod lane;
pub mod reorder;

pub use board::Board;
pub use drag::{DragSession, DragSubject};
pub use item::{Item, ItemId};
pub use lane::{Lane, LaneId};
pub use reorder::array_move;
