//! Pointer drag state machine
//!
//! Two states: idle, and dragging with the pointer position sampled on the
//! previous frame. A left button press starts a drag; any other button event
//! ends it.

use super::MouseButton;

/// Rotation drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No rotation applied
    #[default]
    Idle,
    /// Rotation applied each frame from the pointer delta
    Dragging {
        /// Pointer position at the last sample, in window coordinates
        last: (f64, f64),
    },
}

impl DragState {
    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Feed a mouse button event with the pointer position at that moment
    pub fn button_event(&mut self, button: MouseButton, pressed: bool, cursor: (f64, f64)) {
        *self = if button == MouseButton::Left && pressed {
            Self::Dragging { last: cursor }
        } else {
            Self::Idle
        };
    }

    /// Sample the pointer and return the movement since the last sample
    ///
    /// Returns `None` while idle or when the pointer did not move.
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample(&mut self, cursor: (f64, f64)) -> Option<(f32, f32)> {
        let Self::Dragging { last } = self else {
            return None;
        };

        let delta = ((cursor.0 - last.0) as f32, (cursor.1 - last.1) as f32);
        *last = cursor;

        if delta.0 == 0.0 && delta.1 == 0.0 {
            None
        } else {
            Some(delta)
        }
    }
}
