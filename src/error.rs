use crate::domain::{ItemId, LaneId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlateError>;

#[derive(Debug, Error)]
pub enum SlateError {
    #[error("Lane not found: {0}")]
    LaneNotFound(LaneId),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("A drag session is already active")]
    DragInProgress,

    #[error("No drag session is active")]
    NoActiveDrag,

    #[error("Invalid id format: {0}")]
    InvalidId(String),
}
