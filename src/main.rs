//! Reorder Cards Entry Point

mod app;
mod components;
mod config;
mod logging;
mod models;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    log::info!("mounting {} cards", config.card_count);

    mount_to_body(move || view! { <App config=config /> });
}
