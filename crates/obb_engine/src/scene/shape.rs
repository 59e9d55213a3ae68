//! Shape transform
//!
//! Pure data describing where a shape sits in the world. Composes into a
//! model matrix in TRS order (translation * rotation * scale), so a local
//! point is scaled first, then rotated, then translated.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Mat4, Rot3, Rot3Ext, Vec3};

/// One of the six discrete movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    /// +X (right)
    PosX,
    /// -X (left)
    NegX,
    /// +Y (up)
    PosY,
    /// -Y (down)
    NegY,
    /// +Z (toward the viewer)
    PosZ,
    /// -Z (away from the viewer)
    NegZ,
}

impl MoveDirection {
    /// All directions, in a stable order
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Unit world-space vector for this direction
    pub fn unit_vector(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::new(1.0, 0.0, 0.0),
            Self::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Self::PosY => Vec3::new(0.0, 1.0, 0.0),
            Self::NegY => Vec3::new(0.0, -1.0, 0.0),
            Self::PosZ => Vec3::new(0.0, 0.0, 1.0),
            Self::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

/// Position, orientation and scale of one shape
///
/// `rotation` must stay a pure rotation (orthonormal, no shear); the
/// collision test relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeTransform {
    /// World space position of the local origin
    pub translation: Vec3,

    /// Local axes expressed in world space
    pub rotation: Rot3,

    /// Per-axis scale, applied in local space
    pub scale: Vec3,
}

impl Default for ShapeTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Rot3::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl ShapeTransform {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rot3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale (uniform)
    #[must_use]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Composed model matrix (TRS order)
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.translation)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// World position of the shape's local origin
    pub fn world_position(&self) -> Vec3 {
        self.translation
    }

    /// Local axis `index` (0 = X, 1 = Y, 2 = Z) in world space
    pub fn local_axis(&self, index: usize) -> Vec3 {
        self.rotation.basis_axis(index)
    }

    /// Pre-multiplies the translation by a step of `distance` along `direction`
    pub fn translate(&mut self, direction: MoveDirection, distance: f32) {
        self.translation += direction.unit_vector() * distance;
    }

    /// Pre-multiplies the rotation by `yaw * pitch`
    ///
    /// Yaw turns about world Y by `yaw_angle`, pitch turns about world X by
    /// `pitch_angle`. Rotations accumulate across calls.
    pub fn rotate(&mut self, yaw_angle: f32, pitch_angle: f32) {
        let delta = Rot3::yaw(yaw_angle) * Rot3::pitch(pitch_angle);
        self.rotation = delta * self.rotation;
        self.rotation.renormalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity() {
        let transform = ShapeTransform::identity();
        assert_eq!(transform.translation, Vec3::zeros());
        assert_eq!(transform.rotation, Rot3::identity());
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(transform.model_matrix(), Mat4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_model_matrix_applies_scale_then_rotation_then_translation() {
        let transform = ShapeTransform::from_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Rot3::yaw(HALF_PI))
            .with_scale(Vec3::new(2.0, 1.0, 1.0));

        // Local +X scaled to length 2, turned onto -Z, then moved
        let local = nalgebra::Point3::new(1.0, 0.0, 0.0);
        let world = transform.model_matrix().transform_point(&local);
        assert_relative_eq!(world.coords, Vec3::new(1.0, 2.0, 1.0), epsilon = EPSILON);
        assert_eq!(
            transform.model_matrix().fixed_view::<3, 1>(0, 3).into_owned(),
            transform.world_position()
        );
    }

    #[test]
    fn test_translate_each_direction() {
        for direction in MoveDirection::ALL {
            let mut transform = ShapeTransform::identity();
            transform.translate(direction, 0.02);
            assert_relative_eq!(transform.translation, direction.unit_vector() * 0.02, epsilon = EPSILON);
            assert_eq!(transform.rotation, Rot3::identity());
        }
    }

    #[test]
    fn test_translate_accumulates() {
        let mut transform = ShapeTransform::from_position(Vec3::new(0.15, 0.0, 0.0));
        transform.translate(MoveDirection::NegX, 0.1);
        transform.translate(MoveDirection::PosY, 0.25);
        transform.translate(MoveDirection::NegZ, 0.5);
        assert_relative_eq!(transform.translation, Vec3::new(0.05, 0.25, -0.5), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_pre_multiplies_yaw_then_pitch() {
        let start = Rot3::from_axis_angle(&Vec3::z_axis(), 0.4);
        let mut transform = ShapeTransform::identity().with_rotation(start);

        transform.rotate(0.3, -0.2);

        let expected = Rot3::yaw(0.3) * Rot3::pitch(-0.2) * start;
        assert_relative_eq!(*transform.rotation.matrix(), *expected.matrix(), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_stays_orthonormal() {
        let mut transform = ShapeTransform::identity();
        for step in 0..5000 {
            let wobble = if step % 2 == 0 { 0.013 } else { -0.007 };
            transform.rotate(0.01 + wobble, 0.02 - wobble);
        }

        let m = transform.rotation.matrix();
        assert_relative_eq!(m.transpose() * m, crate::foundation::math::Mat3::identity(), epsilon = 1e-4);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_local_axes_follow_rotation() {
        let transform = ShapeTransform::identity().with_rotation(Rot3::pitch(HALF_PI));
        assert_relative_eq!(transform.local_axis(0), Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(transform.local_axis(1), Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
        assert_relative_eq!(transform.local_axis(2), Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
    }
}
