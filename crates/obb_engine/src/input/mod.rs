//! Input vocabulary and per-frame input handling
//!
//! Frontends translate their native events into [`InputEvent`]s and push them
//! through an [`InputQueue`]; the simulation drains the queue once per frame.
//! Nothing here registers callbacks.

pub mod drag;
pub mod queue;
pub mod script;

pub use drag::DragState;
pub use queue::InputQueue;
pub use script::{InputScript, ScriptFrame, ScriptedFrontend};

use serde::{Deserialize, Serialize};

use crate::scene::MoveDirection;

/// Keys the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Left control
    LeftControl,
    /// Left shift
    LeftShift,
    /// Space key
    Space,
    /// Escape key
    Escape,
}

impl KeyCode {
    /// Movement bound to this key, if any
    ///
    /// WASD moves in the XY plane; left control and left shift move along Z.
    pub fn movement(self) -> Option<MoveDirection> {
        match self {
            Self::W => Some(MoveDirection::PosY),
            Self::A => Some(MoveDirection::NegX),
            Self::S => Some(MoveDirection::NegY),
            Self::D => Some(MoveDirection::PosX),
            Self::LeftControl => Some(MoveDirection::PosZ),
            Self::LeftShift => Some(MoveDirection::NegZ),
            Self::Space | Self::Escape => None,
        }
    }
}

/// State change of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key held long enough to auto-repeat
    Repeat,
    /// Key went up
    Release,
}

impl KeyAction {
    /// Press and repeat both trigger discrete commands
    pub fn is_active(self) -> bool {
        matches!(self, Self::Press | Self::Repeat)
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button, drives rotation
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Discrete input events delivered by a frontend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Key input event
    Key {
        /// The key
        key: KeyCode,
        /// What happened to it
        action: KeyAction,
    },

    /// Mouse button event
    MouseButton {
        /// The mouse button that was pressed/released
        button: MouseButton,
        /// Whether the button was pressed (true) or released (false)
        pressed: bool,
    },

    /// Window close requested
    CloseRequested,
}

impl InputEvent {
    /// Shorthand for a key press
    pub fn key_press(key: KeyCode) -> Self {
        Self::Key { key, action: KeyAction::Press }
    }

    /// Whether this event asks the loop to stop
    pub fn is_close_request(&self) -> bool {
        matches!(
            self,
            Self::CloseRequested | Self::Key { key: KeyCode::Escape, action: KeyAction::Press }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_cover_all_directions() {
        let keys = [
            KeyCode::W,
            KeyCode::A,
            KeyCode::S,
            KeyCode::D,
            KeyCode::LeftControl,
            KeyCode::LeftShift,
        ];
        let mut directions: Vec<_> = keys.iter().filter_map(|key| key.movement()).collect();
        directions.dedup();
        assert_eq!(directions.len(), 6);
        for direction in MoveDirection::ALL {
            assert!(directions.contains(&direction), "{direction:?} not bound");
        }
        assert_eq!(KeyCode::Space.movement(), None);
    }

    #[test]
    fn test_close_requests() {
        assert!(InputEvent::CloseRequested.is_close_request());
        assert!(InputEvent::key_press(KeyCode::Escape).is_close_request());
        assert!(!InputEvent::Key { key: KeyCode::Escape, action: KeyAction::Release }.is_close_request());
        assert!(!InputEvent::key_press(KeyCode::Space).is_close_request());
    }
}
