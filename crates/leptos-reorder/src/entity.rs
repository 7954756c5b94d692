//! Entity Trait & Errors
//!
//! Contract for anything that can live in a reorderable list,
//! plus the error type shared by the list operations.

use std::fmt::Debug;
use std::hash::Hash;

/// Core trait for reorderable entities
///
/// Two entities are the same row exactly when their ids are equal;
/// nothing else about the value takes part in reordering. Thread-safety
/// bounds let the controller live in a reactive signal.
pub trait Entity: Sized + Send + Sync + Clone + 'static {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for list operations
pub type ReorderResult<T> = Result<T, ReorderError>;

/// List-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// Two entities share an identifier
    DuplicateId(String),
    /// An index fell outside the list
    IndexOutOfBounds { index: usize, len: usize },
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::DuplicateId(id) => write!(f, "Duplicate id: {}", id),
            ReorderError::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {} (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for ReorderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ReorderError::DuplicateId("7".into()).to_string(), "Duplicate id: 7");
        assert_eq!(
            ReorderError::IndexOutOfBounds { index: 5, len: 3 }.to_string(),
            "Index out of bounds: 5 (len 3)"
        );
    }
}
