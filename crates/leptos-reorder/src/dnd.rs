//! Leptos Mouse Bindings
//!
//! Drives a [`ReorderController`] from mouse events.
//! Uses movement threshold to distinguish click from drag.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::controller::ReorderController;
use crate::entity::Entity;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long a just-moved row keeps its highlight
pub const SETTLE_MS: u32 = 250;

/// DnD state signals
pub struct DndSignals<T: Entity> {
    /// Single owner of the list order and the drag session
    pub controller: RwSignal<ReorderController<T>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<T::Id>>,
    pub pending_id_write: WriteSignal<Option<T::Id>>,
    /// Row currently under the pointer
    pub hover_id_read: ReadSignal<Option<T::Id>>,
    pub hover_id_write: WriteSignal<Option<T::Id>>,
    /// Row moved by the latest reorder, until it settles
    pub just_moved_read: ReadSignal<Option<T::Id>>,
    pub just_moved_write: WriteSignal<Option<T::Id>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<T: Entity> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Entity> Copy for DndSignals<T> {}

impl<T: Entity> DndSignals<T> {
    /// Snapshot of the current order (tracked)
    pub fn items(&self) -> Vec<T> {
        self.controller.with(|c| c.items().to_vec())
    }

    pub fn is_dragging(&self, id: T::Id) -> bool {
        self.controller.with(|c| c.is_dragging(id))
    }

    pub fn is_just_moved(&self, id: T::Id) -> bool {
        self.just_moved_read.get() == Some(id)
    }
}

pub fn create_dnd_signals<T: Entity>(controller: ReorderController<T>) -> DndSignals<T> {
    let controller = RwSignal::new(controller);
    let (pending_id_read, pending_id_write) = signal(None::<T::Id>);
    let (hover_id_read, hover_id_write) = signal(None::<T::Id>);
    let (just_moved_read, just_moved_write) = signal(None::<T::Id>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        controller,
        pending_id_read,
        pending_id_write,
        hover_id_read,
        hover_id_write,
        just_moved_read,
        just_moved_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Mark a row as just moved, clearing the mark after [`SETTLE_MS`]
fn settle<T: Entity>(dnd: DndSignals<T>, id: T::Id) {
    dnd.just_moved_write.set(Some(id));
    let clear = dnd.just_moved_write;
    Timeout::new(SETTLE_MS, move || {
        clear.update(|current| {
            // A later reorder may own the mark by now
            if *current == Some(id) {
                *current = None;
            }
        });
    })
    .forget();
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<T: Entity>(dnd: DndSignals<T>, item_id: T::Id) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on document - starts drag once moved past the threshold
pub fn bind_global_mousemove<T: Entity>(dnd: DndSignals<T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.get_untracked() else { return; };
        if dnd.controller.with_untracked(|c| c.dragging().is_some()) {
            return;
        }

        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.controller.maybe_update(|c| c.on_drag_start(pending));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for items - reorders while dragging
pub fn make_on_item_mouseenter<T: Entity>(dnd: DndSignals<T>, item_id: T::Id) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.hover_id_write.set(Some(item_id));
        if dnd.controller.with_untracked(|c| c.dragging().is_none()) {
            return;
        }

        let mut moved = None;
        dnd.controller.maybe_update(|c| {
            moved = c.on_drag_enter(item_id);
            moved.is_some()
        });
        if let Some(reorder) = moved {
            settle(dnd, reorder.id);
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<T: Entity>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.hover_id_write.set(None);
    }
}

/// Bind mouseup on document: a release over a row drops, anywhere else cancels.
///
/// `on_drop` receives the final order after an accepted drop.
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: Entity,
    F: Fn(Vec<T::Id>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        dnd.pending_id_write.set(None);

        let dragging = dnd.controller.with_untracked(|c| c.dragging());
        let hovered = dnd.hover_id_read.get_untracked();
        match (dragging, hovered) {
            (Some(_), Some(_)) => {
                let mut accepted = false;
                dnd.controller.update(|c| accepted = c.on_drop());
                if accepted {
                    on_drop(dnd.controller.with_untracked(|c| c.list().ids()));
                }
            }
            (Some(_), None) => dnd.controller.update(|c| c.on_drag_cancel()),
            // Not dragging - click event will fire naturally on the element
            (None, _) => {}
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
