//! Leptos Reorder
//!
//! Drag-to-reorder for a single vertical list.
//!
//! The core (`entity`, `list`, `controller`) is toolkit-independent and
//! unit-tested without a browser. `dnd` binds it to Leptos mouse events.

mod controller;
mod dnd;
mod entity;
mod list;

pub use controller::{DragPhase, DragSession, DropOperation, Reorder, ReorderController};
pub use dnd::{
    bind_global_mousemove, bind_global_mouseup, create_dnd_signals, make_on_item_mouseenter,
    make_on_mousedown, make_on_mouseleave, DndSignals, DRAG_THRESHOLD_PX, SETTLE_MS,
};
pub use entity::{Entity, ReorderError, ReorderResult};
pub use list::OrderedList;
