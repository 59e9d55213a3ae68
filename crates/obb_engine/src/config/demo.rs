//! Demo configuration
//!
//! Defaults reproduce the classic start-up scene: a 2x2x2 box shrunk to a
//! tenth of its size and placed just right of the origin, with the point
//! just left of it.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Rot3, Vec3};
use crate::physics::OrientedBox;
use crate::scene::ShapeTransform;

use super::Config;

/// Top-level demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Distance moved per movement command, in world units
    pub movement_speed: f32,

    /// Radians of rotation per pixel of pointer drag
    pub rotation_speed: f32,

    /// Window settings, used only by windowed frontends
    pub window: WindowConfig,

    /// Local, unscaled collider size of the box
    pub box_dimensions: OrientedBox,

    /// Initial placement of the box
    pub box_shape: ShapeConfig,

    /// Initial placement of the point
    pub point_shape: ShapeConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            movement_speed: 0.02,
            rotation_speed: 0.01,
            window: WindowConfig::default(),
            box_dimensions: OrientedBox::default(),
            box_shape: ShapeConfig {
                translation: [0.15, 0.0, 0.0],
                rotation_degrees: [0.0, 0.0, 0.0],
                scale: [0.1, 0.1, 0.1],
            },
            point_shape: ShapeConfig {
                translation: [-0.15, 0.0, 0.0],
                ..ShapeConfig::default()
            },
        }
    }
}

impl Config for DemoConfig {}

/// Window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Point - OBB Collision Detection".to_string(),
            width: 800,
            height: 800,
        }
    }
}

/// Initial placement of one shape, in human-friendly units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// World position
    pub translation: [f32; 3],
    /// Euler angles about X, Y, Z, in degrees
    pub rotation_degrees: [f32; 3],
    /// Per-axis scale
    pub scale: [f32; 3],
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation_degrees: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl ShapeConfig {
    /// Build the runtime transform
    pub fn to_transform(&self) -> ShapeTransform {
        let [rx, ry, rz] = self.rotation_degrees.map(utils::deg_to_rad);
        ShapeTransform::from_position(Vec3::from(self.translation))
            .with_rotation(Rot3::from_euler_angles(rx, ry, rz))
            .with_scale(Vec3::from(self.scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_defaults_match_start_up_scene() {
        let config = DemoConfig::default();
        let box_transform = config.box_shape.to_transform();
        let point_transform = config.point_shape.to_transform();

        assert_eq!(config.box_dimensions, OrientedBox::new(2.0, 2.0, 2.0));
        assert_eq!(box_transform.translation, Vec3::new(0.15, 0.0, 0.0));
        assert_eq!(box_transform.scale, Vec3::new(0.1, 0.1, 0.1));
        assert_eq!(box_transform.rotation, Rot3::identity());
        assert_eq!(point_transform.translation, Vec3::new(-0.15, 0.0, 0.0));
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn test_rotation_degrees_are_about_x_y_z() {
        use crate::foundation::math::Rot3Ext;
        use approx::assert_relative_eq;

        let about_y = ShapeConfig { rotation_degrees: [0.0, 30.0, 0.0], ..ShapeConfig::default() };
        assert_relative_eq!(
            about_y.to_transform().rotation,
            Rot3::yaw(utils::deg_to_rad(30.0)),
            epsilon = 1e-6
        );

        let about_x = ShapeConfig { rotation_degrees: [30.0, 0.0, 0.0], ..ShapeConfig::default() };
        assert_relative_eq!(
            about_x.to_transform().rotation,
            Rot3::pitch(utils::deg_to_rad(30.0)),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = DemoConfig::default();
        config.movement_speed = 0.05;
        config.box_dimensions = OrientedBox::new(1.0, 3.0, 0.5);

        let text = config.to_string_for("demo.toml").expect("serialize toml");
        let parsed: DemoConfig = toml::from_str(&text).expect("parse toml");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = DemoConfig::default();
        config.point_shape.rotation_degrees = [0.0, 45.0, 0.0];

        let text = config.to_string_for("demo.ron").expect("serialize ron");
        let parsed: DemoConfig = ron::from_str(&text).expect("parse ron");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: DemoConfig = toml::from_str(
            r#"
            rotation_speed = 0.02

            [box_dimensions]
            width = -4.0
            height = 1.0
            depth = 1.0
            "#,
        )
        .expect("parse partial toml");

        assert_eq!(parsed.rotation_speed, 0.02);
        assert_eq!(parsed.movement_speed, 0.02);
        // Negative sizes are clamped on the way in
        assert_eq!(parsed.box_dimensions.width(), 0.0);
        assert_eq!(parsed.window, WindowConfig::default());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = DemoConfig::default().to_string_for("demo.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("obb_engine_demo_{}.toml", std::process::id()));
        let config = DemoConfig::default();

        config.save_to_file(&path).expect("save config");
        let loaded = DemoConfig::load_from_file(&path).expect("load config");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("obb_engine_definitely_missing.ron");
        let loaded = DemoConfig::load_or_default(&path).expect("defaults");
        assert_eq!(loaded, DemoConfig::default());
    }

    #[test]
    fn test_bundled_demo_config() {
        let config: DemoConfig = toml::from_str(include_str!("../../../../demos/demo.toml"))
            .expect("parse bundled config");
        assert_eq!(config.box_dimensions, OrientedBox::new(4.0, 2.0, 1.0));
        assert_eq!(config.box_shape.rotation_degrees, [0.0, 30.0, 0.0]);
        assert_eq!(config.point_shape.scale, [1.0, 1.0, 1.0]);
    }
}
