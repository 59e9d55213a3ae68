//! GLFW window frontend
//!
//! Opens a window without a client API, translates GLFW key and mouse events
//! into engine input, and reports the collision state in the window title.

use glfw::{Action, Key, WindowEvent};
use obb_engine::config::WindowConfig;
use obb_engine::prelude::*;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Target time between frames, in seconds
const FRAME_INTERVAL: f64 = 1.0 / 60.0;

/// GLFW window wrapper
pub struct GlfwFrontend {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    base_title: String,
    shown: Option<(CollisionVerdict, ShapeId)>,
}

impl GlfwFrontend {
    /// Create the window and enable the event polling the demo needs
    pub fn new(config: &WindowConfig) -> Result<Self, WindowError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        // Nothing is drawn, so no OpenGL context is needed
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_close_polling(true);

        log::info!("Window created: {}x{} \"{}\"", config.width, config.height, config.title);

        Ok(Self {
            glfw,
            window,
            events,
            base_title: config.title.clone(),
            shown: None,
        })
    }
}

fn translate_key(key: Key) -> Option<KeyCode> {
    match key {
        Key::W => Some(KeyCode::W),
        Key::A => Some(KeyCode::A),
        Key::S => Some(KeyCode::S),
        Key::D => Some(KeyCode::D),
        Key::LeftControl => Some(KeyCode::LeftControl),
        Key::LeftShift => Some(KeyCode::LeftShift),
        Key::Space => Some(KeyCode::Space),
        Key::Escape => Some(KeyCode::Escape),
        _ => None,
    }
}

fn translate_action(action: Action) -> KeyAction {
    match action {
        Action::Press => KeyAction::Press,
        Action::Repeat => KeyAction::Repeat,
        Action::Release => KeyAction::Release,
    }
}

fn translate_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        _ => MouseButton::Middle,
    }
}

fn translate_event(event: WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Key(key, _, action, _) => translate_key(key).map(|key| InputEvent::Key {
            key,
            action: translate_action(action),
        }),
        WindowEvent::MouseButton(button, action, _) => Some(InputEvent::MouseButton {
            button: translate_button(button),
            pressed: action == Action::Press,
        }),
        WindowEvent::Close => Some(InputEvent::CloseRequested),
        _ => None,
    }
}

impl Frontend for GlfwFrontend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.glfw.wait_events_timeout(FRAME_INTERVAL);
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.window.get_cursor_pos()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn present(&mut self, frame: &FrameReport) -> Result<(), EngineError> {
        let state = (frame.verdict, frame.selected);
        if self.shown != Some(state) {
            let title = format!(
                "{} - {}: {} ({} selected)",
                self.base_title,
                frame.verdict,
                frame.tint.describe(),
                frame.selected
            );
            self.window.set_title(&title);
            self.shown = Some(state);
        }
        Ok(())
    }
}
