//! Selection state
//!
//! Tracks which of the two shapes receives movement and rotation commands.

use serde::{Deserialize, Serialize};

/// Identifies one of the two demo shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    /// The oriented box
    Box,
    /// The point
    Point,
}

impl ShapeId {
    /// The other shape
    pub fn other(self) -> Self {
        match self {
            Self::Box => Self::Point,
            Self::Point => Self::Box,
        }
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Box => write!(f, "box"),
            Self::Point => write!(f, "point"),
        }
    }
}

/// Exactly one selected shape at all times
///
/// # Examples
/// ```
/// # use obb_engine::scene::{Selection, ShapeId};
/// let mut selection = Selection::default();
/// assert_eq!(selection.selected(), ShapeId::Box);
/// selection.toggle();
/// assert_eq!(selection.selected(), ShapeId::Point);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    selected: ShapeId,
}

impl Selection {
    /// Create a selection starting on `initial`
    pub fn new(initial: ShapeId) -> Self {
        Self { selected: initial }
    }

    /// Currently selected shape
    pub fn selected(&self) -> ShapeId {
        self.selected
    }

    /// Whether `shape` is the selected one
    pub fn is_selected(&self, shape: ShapeId) -> bool {
        self.selected == shape
    }

    /// Swap to the other shape and return the new selection
    pub fn toggle(&mut self) -> ShapeId {
        self.selected = self.selected.other();
        self.selected
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(ShapeId::Box)
    }
}
