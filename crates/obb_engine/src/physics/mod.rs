//! Physics module for collision detection
//!
//! Only narrow point containment is provided: a single point tested against a
//! single oriented box. There is no broad phase and no collision response.

pub mod collision;

pub use collision::{OrientedBox, test_point_collision};
