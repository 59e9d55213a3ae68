//! Scene state for the demo
//!
//! Two movable shapes (a box and a point), which one is selected, and the
//! [`SimulationContext`] that owns them and applies per-frame input.

pub mod shape;
pub mod selection;
pub mod simulation;

pub use shape::{ShapeTransform, MoveDirection};
pub use selection::{Selection, ShapeId};
pub use simulation::{SimulationContext, CollisionVerdict};
