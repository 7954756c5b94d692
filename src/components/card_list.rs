//! Card List Component
//!
//! Scrollable stack of placeholder cards, reorderable by dragging.

use leptos::prelude::*;

use crate::components::PlaceholderCard;
use crate::config::use_app_config;
use crate::models::{placeholder_cards, Card};

use leptos_reorder::*;

/// Status line shown above the stack
fn status_text(phase: DragPhase<u32>, operation: DropOperation) -> String {
    match phase {
        DragPhase::Idle => "Drag a card to reorder".to_string(),
        DragPhase::Dragging(id) => format!("{:?}: Placeholder {}", operation, id),
    }
}

/// Card list with DnD support
#[component]
pub fn CardList() -> impl IntoView {
    let config = use_app_config();

    let mut controller = ReorderController::from_items(placeholder_cards(config.card_count))
        .expect("placeholder ids are unique");
    controller.set_enabled(config.dnd_enabled);
    let dnd = create_dnd_signals(controller);

    bind_global_mouseup(dnd, move |order: Vec<u32>| {
        log::info!("drop accepted, order: {:?}", order);
    });

    let status = move || {
        dnd.controller.with(|c| status_text(c.phase(), c.drop_proposal()))
    };

    view! {
        <div class="scroll-view">
            <p class="drag-status">{status}</p>
            <div class="card-stack">
                <For
                    each=move || dnd.items()
                    key=|card: &Card| card.id
                    children=move |card| view! { <PlaceholderCard card=card dnd=dnd /> }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(DragPhase::Idle, DropOperation::Move), "Drag a card to reorder");
        assert_eq!(
            status_text(DragPhase::Dragging(4), DropOperation::Move),
            "Move: Placeholder 4"
        );
    }
}
