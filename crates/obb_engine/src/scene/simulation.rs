//! Simulation context
//!
//! Owns everything the demo mutates between frames: both shape transforms,
//! the box collider, which shape is selected and the pointer drag state.
//! Frontends drive it with direct calls; there is no global state.

use crate::config::DemoConfig;
use crate::foundation::math::Vec3;
use crate::input::{DragState, InputEvent};
use crate::physics::OrientedBox;

use super::{MoveDirection, Selection, ShapeId, ShapeTransform};

/// Outcome of the per-frame collision test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionVerdict {
    /// The point is outside the box
    Separated,
    /// The point is inside the box or on its surface
    Colliding,
}

impl CollisionVerdict {
    /// Whether the shapes collide
    pub fn is_colliding(self) -> bool {
        self == Self::Colliding
    }
}

impl From<bool> for CollisionVerdict {
    fn from(colliding: bool) -> Self {
        if colliding { Self::Colliding } else { Self::Separated }
    }
}

impl std::fmt::Display for CollisionVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Separated => write!(f, "separated"),
            Self::Colliding => write!(f, "colliding"),
        }
    }
}

/// Explicit owner of the demo state
#[derive(Debug, Clone)]
pub struct SimulationContext {
    obb: OrientedBox,
    box_shape: ShapeTransform,
    point_shape: ShapeTransform,
    selection: Selection,
    drag: DragState,
    movement_speed: f32,
    rotation_speed: f32,
}

impl SimulationContext {
    /// Default distance per movement command
    pub const DEFAULT_MOVEMENT_SPEED: f32 = 0.02;

    /// Default radians per pixel of drag
    pub const DEFAULT_ROTATION_SPEED: f32 = 0.01;

    /// Create a context with the box selected and default speeds
    pub fn new(obb: OrientedBox, box_shape: ShapeTransform, point_shape: ShapeTransform) -> Self {
        Self {
            obb,
            box_shape,
            point_shape,
            selection: Selection::default(),
            drag: DragState::Idle,
            movement_speed: Self::DEFAULT_MOVEMENT_SPEED,
            rotation_speed: Self::DEFAULT_ROTATION_SPEED,
        }
    }

    /// Create a context from configuration
    pub fn from_config(config: &DemoConfig) -> Self {
        log::info!(
            "Creating simulation: box {}x{}x{}, movement speed {}, rotation speed {}",
            config.box_dimensions.width(),
            config.box_dimensions.height(),
            config.box_dimensions.depth(),
            config.movement_speed,
            config.rotation_speed,
        );

        Self::new(
            config.box_dimensions,
            config.box_shape.to_transform(),
            config.point_shape.to_transform(),
        )
        .with_speeds(config.movement_speed, config.rotation_speed)
    }

    /// Builder pattern: Set movement and rotation speeds
    #[must_use]
    pub fn with_speeds(mut self, movement_speed: f32, rotation_speed: f32) -> Self {
        self.movement_speed = movement_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Box collider dimensions
    pub fn obb(&self) -> &OrientedBox {
        &self.obb
    }

    /// Transform of a shape
    pub fn shape(&self, id: ShapeId) -> &ShapeTransform {
        match id {
            ShapeId::Box => &self.box_shape,
            ShapeId::Point => &self.point_shape,
        }
    }

    fn shape_mut(&mut self, id: ShapeId) -> &mut ShapeTransform {
        match id {
            ShapeId::Box => &mut self.box_shape,
            ShapeId::Point => &mut self.point_shape,
        }
    }

    /// Transform of the box
    pub fn box_transform(&self) -> &ShapeTransform {
        &self.box_shape
    }

    /// Transform of the point
    pub fn point_transform(&self) -> &ShapeTransform {
        &self.point_shape
    }

    /// The point's position in world space
    pub fn point_position(&self) -> Vec3 {
        self.point_shape.world_position()
    }

    /// Shape currently receiving commands
    pub fn selected(&self) -> ShapeId {
        self.selection.selected()
    }

    /// Current pointer drag state
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Move the selected shape one step in `direction`
    pub fn apply_movement(&mut self, direction: MoveDirection) {
        let selected = self.selected();
        let distance = self.movement_speed;
        let shape = self.shape_mut(selected);
        shape.translate(direction, distance);
        log::trace!("Moved {selected} {direction:?} to {:?}", shape.translation);
    }

    /// Rotate the selected shape by a pointer displacement in pixels
    ///
    /// Horizontal motion yaws about world Y, vertical motion pitches about
    /// world X; both scale by the rotation speed.
    pub fn apply_rotation_delta(&mut self, dx: f32, dy: f32) {
        let selected = self.selected();
        let speed = self.rotation_speed;
        self.shape_mut(selected).rotate(dx * speed, dy * speed);
        log::trace!("Rotated {selected} by ({dx}, {dy}) px");
    }

    /// Swap the selected shape
    pub fn toggle_selection(&mut self) -> ShapeId {
        let selected = self.selection.toggle();
        log::debug!("Selected {selected}");
        selected
    }

    /// Apply one input event; `cursor` is the pointer position when it arrived
    pub fn handle_event(&mut self, event: &InputEvent, cursor: (f64, f64)) {
        match *event {
            InputEvent::Key { key, action } if action.is_active() => {
                if let Some(direction) = key.movement() {
                    self.apply_movement(direction);
                } else if key == crate::input::KeyCode::Space {
                    self.toggle_selection();
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                let was_dragging = self.drag.is_dragging();
                self.drag.button_event(button, pressed, cursor);
                match (was_dragging, self.drag.is_dragging()) {
                    (false, true) => log::debug!("Drag started at {cursor:?}"),
                    (true, false) => log::debug!("Drag ended at {cursor:?}"),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// Sample the pointer; while dragging, rotate by the motion since last frame
    pub fn sample_pointer(&mut self, cursor: (f64, f64)) {
        if let Some((dx, dy)) = self.drag.sample(cursor) {
            self.apply_rotation_delta(dx, dy);
        }
    }

    /// Run the collision test against the current transforms
    pub fn test_collision(&self) -> CollisionVerdict {
        let verdict = self.obb.contains_point(&self.box_shape, self.point_position());
        CollisionVerdict::from(verdict)
    }

    /// One frame: apply events in order, sample the pointer, test
    pub fn step<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
        cursor: (f64, f64),
    ) -> CollisionVerdict {
        for event in events {
            self.handle_event(event, cursor);
        }
        self.sample_pointer(cursor);
        self.test_collision()
    }
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}
