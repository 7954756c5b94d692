//! Ordered List
//!
//! The ordered sequence of entities whose order is the only state that
//! matters. Every mutation is a permutation: length and membership never
//! change after construction.

use std::collections::HashSet;

use crate::entity::{Entity, ReorderError, ReorderResult};

/// Ordered sequence of entities, unique by id
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> OrderedList<T> {
    /// Build a list, rejecting duplicate ids
    pub fn new(items: Vec<T>) -> ReorderResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(ReorderError::DuplicateId(format!("{:?}", item.id())));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(Entity::id).collect()
    }

    /// Current index of an id, or None if it is not in the list
    pub fn position_of(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Move the item at `from` to destination offset `to`.
    ///
    /// `to` is an offset in `0..=len` measured before removal, so moving
    /// downward lands the item at `to - 1`. Returns the final index.
    /// Nothing is touched when either index is out of range.
    pub fn try_move_item(&mut self, from: usize, to: usize) -> ReorderResult<usize> {
        let len = self.items.len();
        if from >= len {
            return Err(ReorderError::IndexOutOfBounds { index: from, len });
        }
        if to > len {
            return Err(ReorderError::IndexOutOfBounds { index: to, len });
        }

        let dest = if to > from { to - 1 } else { to };
        if dest != from {
            let item = self.items.remove(from);
            self.items.insert(dest, item);
        }
        Ok(dest)
    }

    /// Same as [`try_move_item`](Self::try_move_item) but panics on a bad index.
    ///
    /// Callers are expected to pass indices they just looked up.
    pub fn move_item(&mut self, from: usize, to: usize) -> usize {
        match self.try_move_item(from, to) {
            Ok(dest) => dest,
            Err(e) => panic!("move_item({}, {}): {}", from, to, e),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
