//! # OBB Engine
//!
//! Interactive point versus oriented bounding box collision.
//!
//! ## Features
//!
//! - **Point-OBB test**: scalar projection of a point onto a rotated, translated
//!   and scaled box's local axes
//! - **Transform model**: two movable shapes, a selection, and drag rotation
//! - **Frontend port**: windowing and rendering stay outside the core
//! - **Config**: TOML and RON demo settings and input scripts
//!
//! ## Quick Start
//!
//! ```rust
//! use obb_engine::prelude::*;
//!
//! let mut sim = SimulationContext::default();
//! assert_eq!(sim.test_collision(), CollisionVerdict::Separated);
//!
//! // Slide the box left until it swallows the point
//! for _ in 0..15 {
//!     sim.apply_movement(MoveDirection::NegX);
//! }
//! assert!(sim.test_collision().is_colliding());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod physics;
pub mod scene;
pub mod input;
pub mod feedback;
pub mod config;

mod engine;

pub use engine::{Engine, EngineError, FrameReport, Frontend};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError, FrameReport, Frontend,
        config::{Config, ConfigError, DemoConfig},
        feedback::Tint,
        foundation::math::{Vec3, Mat4, Rot3},
        input::{InputEvent, InputQueue, InputScript, KeyAction, KeyCode, MouseButton, ScriptedFrontend},
        physics::{OrientedBox, test_point_collision},
        scene::{CollisionVerdict, MoveDirection, ShapeId, ShapeTransform, SimulationContext},
    };
}
