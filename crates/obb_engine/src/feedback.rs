//! Visual feedback for the collision verdict
//!
//! The presentation layer gets a single hue flag plus the colours it should
//! draw each shape with. Nothing here touches a GPU.

use crate::scene::CollisionVerdict;

/// Linear RGB colour
pub type Color = [f32; 3];

/// Box colour while separated (blue)
pub const BOX_IDLE: Color = [0.0, 0.0, 1.0];
/// Box colour while colliding (pink)
pub const BOX_HIT: Color = [1.0, 0.0, 1.0];
/// Point colour while separated (green)
pub const POINT_IDLE: Color = [0.0, 1.0, 0.0];
/// Point colour while colliding (yellow)
pub const POINT_HIT: Color = [1.0, 1.0, 0.0];

/// Tint signal handed to the presentation layer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    /// 1.0 turns the red channel on, 0.0 leaves it off
    pub hue: f32,
}

impl Tint {
    /// Tint for a verdict
    pub fn from_verdict(verdict: CollisionVerdict) -> Self {
        Self {
            hue: if verdict.is_colliding() { 1.0 } else { 0.0 },
        }
    }

    /// Whether the red channel is on
    pub fn is_hot(&self) -> bool {
        self.hue > 0.5
    }

    /// Colour to draw the box with
    pub fn box_color(&self) -> Color {
        if self.is_hot() { BOX_HIT } else { BOX_IDLE }
    }

    /// Colour to draw the point with
    pub fn point_color(&self) -> Color {
        if self.is_hot() { POINT_HIT } else { POINT_IDLE }
    }

    /// Short description of both shape colours, e.g. `box blue, point green`
    pub fn describe(&self) -> String {
        format!(
            "box {}, point {}",
            color_name(self.box_color()),
            color_name(self.point_color())
        )
    }
}

/// Display name of one of the shape colours
pub fn color_name(color: Color) -> &'static str {
    if color == BOX_IDLE {
        "blue"
    } else if color == BOX_HIT {
        "pink"
    } else if color == POINT_IDLE {
        "green"
    } else if color == POINT_HIT {
        "yellow"
    } else {
        "custom"
    }
}

impl From<CollisionVerdict> for Tint {
    fn from(verdict: CollisionVerdict) -> Self {
        Self::from_verdict(verdict)
    }
}
