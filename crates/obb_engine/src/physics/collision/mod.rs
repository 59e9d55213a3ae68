//! Collision detection between a point and an oriented bounding box
//!
//! # Architecture
//!
//! - **Model Space Storage**: the box keeps only its local, unscaled size
//! - **On-Demand Transformation**: the box's translation, rotation and scale
//!   are supplied at test time from its [`ShapeTransform`](crate::scene::ShapeTransform)
//! - **Coordinate Decoupling**: collision geometry is independent of any mesh
//!
//! # Key Types
//!
//! - [`OrientedBox`] - Local box dimensions (width, height, depth)
//! - [`test_point_collision`] - The point containment test

pub mod obb;

pub use obb::{OrientedBox, test_point_collision};
