//! UI Components
//!
//! Leptos components for the card list.

mod card_list;
mod placeholder_card;

pub use card_list::CardList;
pub use placeholder_card::PlaceholderCard;
