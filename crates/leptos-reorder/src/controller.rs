//! Reorder Controller
//!
//! Plain state machine turning drag-lifecycle events into list permutations.
//! It knows nothing about the UI toolkit: the host reports `drag start`,
//! `drag enter` and `drop` (or `cancel`), the controller commits reorders.
//!
//! ```text
//! Idle --drag_start(I)--> Dragging(I) --drag_enter(T)--> Dragging(I)
//!   ^                          |
//!   +------ drop / cancel -----+
//! ```

use crate::entity::{Entity, ReorderResult};
use crate::list::OrderedList;

/// Drag session: which item, if any, is being dragged
///
/// Also remembers the last target entered, so a repeated enter on the
/// same row is not mistaken for a new crossing. Cleared when the pointer
/// passes back over the dragged row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession<Id> {
    current: Option<Id>,
    last_target: Option<Id>,
}

impl<Id> Default for DragSession<Id> {
    fn default() -> Self {
        Self { current: None, last_target: None }
    }
}

impl<Id: Copy> DragSession<Id> {
    pub fn current(&self) -> Option<Id> {
        self.current
    }

    fn begin(&mut self, id: Id) {
        self.current = Some(id);
        self.last_target = None;
    }

    fn clear(&mut self) -> Option<Id> {
        self.last_target = None;
        self.current.take()
    }
}

/// Resting states of the controller.
///
/// Dropping is transient: `on_drop` passes through it and returns Idle
/// before control goes back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase<Id> {
    Idle,
    Dragging(Id),
}

/// What a drop would do if it landed now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOperation {
    Move,
}

/// One committed move, reported so the host can animate it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder<Id> {
    pub id: Id,
    /// Index before the move
    pub from: usize,
    /// Index after the move
    pub to: usize,
}

/// Owns the list and the drag session; the only writer of either
#[derive(Debug, Clone)]
pub struct ReorderController<T: Entity> {
    list: OrderedList<T>,
    session: DragSession<T::Id>,
    enabled: bool,
}

impl<T: Entity> ReorderController<T> {
    pub fn new(list: OrderedList<T>) -> Self {
        Self {
            list,
            session: DragSession::default(),
            enabled: true,
        }
    }

    /// Build directly from items, rejecting duplicate ids
    pub fn from_items(items: Vec<T>) -> ReorderResult<Self> {
        OrderedList::new(items).map(Self::new)
    }

    pub fn list(&self) -> &OrderedList<T> {
        &self.list
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    pub fn phase(&self) -> DragPhase<T::Id> {
        match self.session.current() {
            Some(id) => DragPhase::Dragging(id),
            None => DragPhase::Idle,
        }
    }

    pub fn dragging(&self) -> Option<T::Id> {
        self.session.current()
    }

    pub fn is_dragging(&self, id: T::Id) -> bool {
        self.session.current() == Some(id)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn drag-and-drop on or off. Disabling cancels a drag in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.on_drag_cancel();
        }
    }

    /// Drops always propose a move
    pub fn drop_proposal(&self) -> DropOperation {
        DropOperation::Move
    }

    /// Text payload handed to the host when a drag begins
    pub fn drag_payload(&self, id: T::Id) -> String
    where
        T::Id: std::fmt::Display,
    {
        id.to_string()
    }

    /// Idle -> Dragging. Returns false when drag-and-drop is disabled.
    pub fn on_drag_start(&mut self, id: T::Id) -> bool {
        if !self.enabled {
            log::trace!("drag start on {:?} ignored: disabled", id);
            return false;
        }
        log::debug!("drag start: {:?}", id);
        self.session.begin(id);
        true
    }

    /// Dragging -> Dragging. Moves the dragged item next to `target`.
    ///
    /// Downward moves land after the target, upward moves before it.
    /// Lookups run against the current order, so a stale dragged or
    /// target id is simply ignored. Entering the same target twice in a
    /// row does nothing the second time; entering the dragged row in
    /// between makes the next enter count again.
    pub fn on_drag_enter(&mut self, target: T::Id) -> Option<Reorder<T::Id>> {
        let current = self.session.current()?;
        if current == target {
            // Passing over the dragged row itself ends the previous crossing
            self.session.last_target = None;
            return None;
        }
        if self.session.last_target == Some(target) {
            return None;
        }
        self.session.last_target = Some(target);

        let (Some(from), Some(to)) = (self.list.position_of(current), self.list.position_of(target))
        else {
            log::trace!("drag enter {:?} ignored: {:?} or target not in list", target, current);
            return None;
        };
        if from == to {
            return None;
        }

        let offset = if from < to { to + 1 } else { to };
        let dest = self.list.move_item(from, offset);
        log::debug!("reorder {:?}: {} -> {}", current, from, dest);
        Some(Reorder { id: current, from, to: dest })
    }

    /// Dragging -> Dropping -> Idle. The drop is always accepted; the
    /// order was already committed during drag-over.
    pub fn on_drop(&mut self) -> bool {
        if let Some(id) = self.session.clear() {
            log::debug!("drop: {:?}", id);
        }
        true
    }

    /// Dragging -> Idle without a drop. Committed reorders are kept.
    pub fn on_drag_cancel(&mut self) {
        if let Some(id) = self.session.clear() {
            log::debug!("drag cancelled: {:?}", id);
        }
    }
}
