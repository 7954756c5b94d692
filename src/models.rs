//! Frontend Models
//!
//! Data structures rendered by the card list.

use leptos_reorder::Entity;

/// A placeholder card; identity is its id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
}

impl Card {
    pub fn label(&self) -> String {
        format!("Placeholder {}", self.id)
    }
}

impl Entity for Card {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Cards with ids `1..=count`
pub fn placeholder_cards(count: u32) -> Vec<Card> {
    (1..=count).map(|id| Card { id }).collect()
}
