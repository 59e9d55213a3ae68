//! Math utilities and types
//!
//! Provides the fundamental math types used by the transform model and the
//! collision test.

pub use nalgebra::{
    Vector3,
    Matrix3, Matrix4,
    Rotation3,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Orthonormal 3x3 rotation
///
/// Column `i` is the rotated frame's local axis `i` expressed in world space.
pub type Rot3 = Rotation3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for rotations driven by pointer input
pub trait Rot3Ext {
    /// Rotation about world Y (yaw), identity for a zero angle
    fn yaw(angle: f32) -> Rot3;

    /// Rotation about world X (pitch), identity for a zero angle
    fn pitch(angle: f32) -> Rot3;

    /// Local axis `index` (0 = X, 1 = Y, 2 = Z) expressed in world space
    ///
    /// Named apart from nalgebra's inherent `Rotation3::axis`, which returns
    /// the axis of rotation instead.
    fn basis_axis(&self, index: usize) -> Vec3;
}

impl Rot3Ext for Rot3 {
    fn yaw(angle: f32) -> Rot3 {
        if angle == 0.0 {
            Rot3::identity()
        } else {
            Rot3::from_axis_angle(&Vec3::y_axis(), angle)
        }
    }

    fn pitch(angle: f32) -> Rot3 {
        if angle == 0.0 {
            Rot3::identity()
        } else {
            Rot3::from_axis_angle(&Vec3::x_axis(), angle)
        }
    }

    fn basis_axis(&self, index: usize) -> Vec3 {
        self.matrix().column(index).into_owned()
    }
}
