//! Placeholder Card Component
//!
//! One row of the list. The whole card is both drag source and drop target.

use leptos::prelude::*;

use crate::config::use_app_config;
use crate::models::Card;

use leptos_reorder::*;

/// A single card in the stack
#[component]
pub fn PlaceholderCard(
    card: Card,
    dnd: DndSignals<Card>,
) -> impl IntoView {
    let config = use_app_config();
    let id = card.id;
    let payload = dnd.controller.with_untracked(|c| c.drag_payload(id));

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_item_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);

    let card_class = move || {
        let mut c = String::from("card");
        if dnd.is_dragging(id) { c.push_str(" dragging"); }
        if dnd.is_just_moved(id) { c.push_str(" just-moved"); }
        c
    };

    view! {
        <div
            class=card_class
            style=config.card_style()
            data-payload=payload
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <span class="card-label">{card.label()}</span>
        </div>
    }
}
