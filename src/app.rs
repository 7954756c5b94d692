//! Reorder Cards App
//!
//! Single screen: the scrollable card list.

use leptos::prelude::*;

use crate::components::CardList;
use crate::config::AppConfig;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide config to all children
    provide_context(config);

    view! {
        <main class="app-layout">
            <CardList />
        </main>
    }
}
