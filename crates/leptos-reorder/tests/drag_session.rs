//! Drag Session Scenarios
//!
//! Full drag sessions driven through the public controller API.

use leptos_reorder::{DragPhase, Entity, OrderedList, Reorder, ReorderController};

#[derive(Debug, Clone, PartialEq)]
struct Card {
    id: u32,
}

impl Entity for Card {
    type Id = u32;
    fn id(&self) -> u32 {
        self.id
    }
}

fn make_controller(count: u32) -> ReorderController<Card> {
    let cards = (1..=count).map(|id| Card { id }).collect();
    ReorderController::from_items(cards).expect("ids are unique")
}

fn order(ctrl: &ReorderController<Card>) -> Vec<u32> {
    ctrl.list().ids()
}

#[test]
fn test_incremental_drag_down_one_row_at_a_time() {
    let mut ctrl = make_controller(5);
    ctrl.on_drag_start(1);
    for target in 2..=5 {
        ctrl.on_drag_enter(target);
    }
    assert_eq!(order(&ctrl), vec![2, 3, 4, 5, 1]);
    assert!(ctrl.on_drop());
    assert_eq!(ctrl.phase(), DragPhase::Idle);
}

#[test]
fn test_lookup_uses_current_order() {
    let mut ctrl = make_controller(5);
    ctrl.on_drag_start(3);
    assert_eq!(ctrl.on_drag_enter(1), Some(Reorder { id: 3, from: 2, to: 0 }));
    // 3 now sits at index 0, so entering 2 is a downward move
    assert_eq!(ctrl.on_drag_enter(2), Some(Reorder { id: 3, from: 0, to: 2 }));
    assert_eq!(order(&ctrl), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_repeated_enter_same_target_is_idempotent() {
    let mut once = make_controller(5);
    once.on_drag_start(1);
    once.on_drag_enter(4);

    let mut twice = make_controller(5);
    twice.on_drag_start(1);
    twice.on_drag_enter(4);
    twice.on_drag_enter(4);

    assert_eq!(order(&once), order(&twice));
}

#[test]
fn test_drop_does_not_mutate_order() {
    let mut ctrl = make_controller(5);
    ctrl.on_drag_start(5);
    ctrl.on_drag_enter(3);
    ctrl.on_drag_enter(2);
    let before = order(&ctrl);
    ctrl.on_drop();
    assert_eq!(order(&ctrl), before);
    assert_eq!(ctrl.dragging(), None);
}

#[test]
fn test_stale_target_is_ignored() {
    // Item 4 was removed before its enter event arrived
    let cards = [1, 2, 3, 5].into_iter().map(|id| Card { id }).collect();
    let mut ctrl = ReorderController::new(OrderedList::new(cards).unwrap());
    ctrl.on_drag_start(2);

    assert_eq!(ctrl.on_drag_enter(4), None);
    assert_eq!(order(&ctrl), vec![1, 2, 3, 5]);
    assert_eq!(ctrl.dragging(), Some(2));
}

#[test]
fn test_new_drag_after_drop() {
    let mut ctrl = make_controller(3);
    ctrl.on_drag_start(1);
    ctrl.on_drag_enter(3);
    ctrl.on_drop();

    ctrl.on_drag_start(2);
    ctrl.on_drag_enter(1);
    ctrl.on_drop();

    assert_eq!(order(&ctrl), vec![3, 1, 2]);
}

#[test]
fn test_reverse_over_just_crossed_row_after_self() {
    let mut ctrl = make_controller(5);
    ctrl.on_drag_start(1);
    ctrl.on_drag_enter(2);
    assert_eq!(order(&ctrl), vec![2, 1, 3, 4, 5]);

    // Pointer turns back: passes over the dragged row, then row 2 again
    assert_eq!(ctrl.on_drag_enter(1), None);
    assert_eq!(ctrl.on_drag_enter(2), Some(Reorder { id: 1, from: 1, to: 0 }));
    assert_eq!(order(&ctrl), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_reverse_step_by_step_after_overshoot() {
    let mut ctrl = make_controller(5);
    ctrl.on_drag_start(1);
    ctrl.on_drag_enter(2);
    ctrl.on_drag_enter(3);
    assert_eq!(order(&ctrl), vec![2, 3, 1, 4, 5]);

    ctrl.on_drag_enter(1);
    ctrl.on_drag_enter(3);
    assert_eq!(order(&ctrl), vec![2, 1, 3, 4, 5]);

    ctrl.on_drag_enter(1);
    ctrl.on_drag_enter(2);
    assert_eq!(order(&ctrl), vec![1, 2, 3, 4, 5]);
    assert!(ctrl.on_drop());
}

#[test]
fn test_reverse_to_adjacent_row_after_reflow() {
    let mut ctrl = make_controller(5);
    ctrl.on_drag_start(1);
    ctrl.on_drag_enter(2);
    ctrl.on_drag_enter(3);
    assert_eq!(order(&ctrl), vec![2, 3, 1, 4, 5]);

    // Upward straight onto the row above the previous target
    assert_eq!(ctrl.on_drag_enter(2), Some(Reorder { id: 1, from: 2, to: 0 }));
    assert_eq!(order(&ctrl), vec![1, 2, 3, 4, 5]);
}
