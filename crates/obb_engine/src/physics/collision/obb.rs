//! Oriented bounding box and point containment
//!
//! The test works by projecting the point onto each of the box's local axes
//! and checking the scalar projection against the scaled half extents on that
//! axis. If the point lies within the bounds on X, Y and Z, it is inside.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Rot3, Rot3Ext, Vec3};
use crate::scene::ShapeTransform;

/// Box collider dimensions in model space
///
/// The box is axis aligned and centered on its own local origin before any
/// transform is applied. Dimensions never change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoxDimensions", into = "BoxDimensions")]
pub struct OrientedBox {
    width: f32,
    height: f32,
    depth: f32,
}

/// Raw serialized form, clamped on the way in
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BoxDimensions {
    width: f32,
    height: f32,
    depth: f32,
}

impl From<BoxDimensions> for OrientedBox {
    fn from(dims: BoxDimensions) -> Self {
        Self::new(dims.width, dims.height, dims.depth)
    }
}

impl From<OrientedBox> for BoxDimensions {
    fn from(obb: OrientedBox) -> Self {
        Self {
            width: obb.width,
            height: obb.height,
            depth: obb.depth,
        }
    }
}

impl Default for OrientedBox {
    /// A 2x2x2 box, spanning -1 to 1 on each local axis
    fn default() -> Self {
        Self::new(2.0, 2.0, 2.0)
    }
}

impl OrientedBox {
    /// Creates a box of the given size
    ///
    /// Negative dimensions are clamped to zero. A zero dimension leaves a flat
    /// box that only accepts points lying exactly on its mid plane.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            depth: depth.max(0.0),
        }
    }

    /// Width along local X
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height along local Y
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Depth along local Z
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Local-space minimum and maximum corners, before scaling
    pub fn half_extents(&self) -> (Vec3, Vec3) {
        let max = Vec3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0);
        (-max, max)
    }

    /// Tests a world-space point against this box placed by `transform`
    pub fn contains_point(&self, transform: &ShapeTransform, point: Vec3) -> bool {
        test_point_collision(
            self,
            transform.translation,
            &transform.rotation,
            transform.scale,
            point,
        )
    }
}

/// Tests whether a world-space point lies inside an oriented box
///
/// # Arguments
/// * `obb` - Local, unscaled box dimensions
/// * `box_translation` - World position of the box's local origin
/// * `box_rotation` - Orthonormal basis; column `i` is local axis `i` in world space
/// * `box_scale` - Per-axis scale applied to the local extents
/// * `point` - The point in world space
///
/// Bounds are inclusive. The point is re-centered by the box translation only;
/// the rotation enters through the per-axis dot products. Axes are checked in
/// order X, Y, Z and the test stops at the first axis that fails.
///
/// A negative scale factor inverts that axis' interval and the test is then
/// always false. A rotation that is not orthonormal gives a well-defined but
/// geometrically meaningless answer.
pub fn test_point_collision(
    obb: &OrientedBox,
    box_translation: Vec3,
    box_rotation: &Rot3,
    box_scale: Vec3,
    point: Vec3,
) -> bool {
    let local = point - box_translation;

    let (min, max) = obb.half_extents();
    let min = box_scale.component_mul(&min);
    let max = box_scale.component_mul(&max);

    for axis in 0..3 {
        let projection = box_rotation.basis_axis(axis).dot(&local);
        if !(min[axis] <= projection && projection <= max[axis]) {
            log::trace!(
                "point rejected on axis {axis}: {projection} outside [{}, {}]",
                min[axis],
                max[axis]
            );
            return false;
        }
    }

    true
}
