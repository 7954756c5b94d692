//! App Configuration
//!
//! Compile-time settings, provided to components via Leptos context.

use leptos::prelude::*;

/// Number of placeholder cards created on mount
pub const CARD_COUNT: u32 = 30;

/// Layout and behavior settings for the card list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    pub card_count: u32,
    pub card_height_px: u32,
    pub horizontal_padding_px: u32,
    pub corner_radius_px: u32,
    /// Master switch for drag-and-drop
    pub dnd_enabled: bool,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            card_count: CARD_COUNT,
            card_height_px: 100,
            horizontal_padding_px: 24,
            corner_radius_px: 10,
            dnd_enabled: true,
            log_level: if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    /// Inline style shared by every card
    pub fn card_style(&self) -> String {
        format!(
            "height: {}px; padding: 0 {}px; border-radius: {}px;",
            self.card_height_px, self.horizontal_padding_px, self.corner_radius_px
        )
    }
}

/// Get the app config from context
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}
