//! # Slate Core
//!
//! Core board state and drag-and-drop reordering engine for Slate
//! kanban boards.
//!
//! This crate provides the board model (lanes and items as ordered
//! sequences), the transient drag session, and the relocation
//! algorithms that decide what a drag-in-progress or a completed drop
//! does to the arrangement, without any dependency on a specific UI
//! implementation.
//!
//! The [`Board`] is the single owning state machine: the presentation
//! layer forwards [`BoardEvent`]s into [`Board::apply`] (or calls the
//! mutators directly) and re-reads the lane and item sequences after
//! each event. Item drags reflow the board live on every hover
//! transition; lane drags commit on drop.

pub mod domain;
pub mod error;
pub mod event;

// Re-export commonly used types
pub use domain::{
    board::Board,
    drag::{DragSession, DragSubject},
    item::{Item, ItemId},
    lane::{Lane, LaneId},
};
pub use error::{Result, SlateError};
pub use event::BoardEvent;
