//! Scripted input for headless runs
//!
//! An [`InputScript`] is a list of frames, each with an optional pointer
//! position and the events that arrive during that frame. Scripts load from
//! TOML or RON through the [`Config`](crate::config::Config) trait.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::engine::{EngineError, FrameReport, Frontend};

use super::InputEvent;

/// One scripted frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptFrame {
    /// Pointer position for this frame; keeps the previous one when absent
    pub cursor: Option<(f64, f64)>,
    /// Events delivered this frame
    pub events: Vec<InputEvent>,
    /// How many consecutive frames repeat this entry
    pub repeat: u32,
}

impl Default for ScriptFrame {
    fn default() -> Self {
        Self {
            cursor: None,
            events: Vec::new(),
            repeat: 1,
        }
    }
}

/// A recorded input sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputScript {
    /// Frames in playback order
    pub frames: Vec<ScriptFrame>,
}

impl Config for InputScript {}

impl InputScript {
    /// Total frames after expanding repeats
    pub fn frame_count(&self) -> usize {
        self.frames.iter().map(|frame| frame.repeat as usize).sum()
    }
}

/// Frontend that replays an [`InputScript`] and records what it is shown
#[derive(Debug)]
pub struct ScriptedFrontend {
    /// Front entry's `repeat` counts the frames it still has to play
    pending: VecDeque<ScriptFrame>,
    cursor: (f64, f64),
    reports: Vec<FrameReport>,
}

impl ScriptedFrontend {
    /// Create a frontend that will play `script` from the start
    pub fn new(script: InputScript) -> Self {
        let pending = script
            .frames
            .into_iter()
            .filter(|frame| frame.repeat > 0)
            .collect();

        Self {
            pending,
            cursor: (0.0, 0.0),
            reports: Vec::new(),
        }
    }

    /// Frames presented so far
    pub fn reports(&self) -> &[FrameReport] {
        &self.reports
    }

    /// Consume the frontend and keep the reports
    pub fn into_reports(self) -> Vec<FrameReport> {
        self.reports
    }
}

impl Frontend for ScriptedFrontend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let Some(frame) = self.pending.front_mut() else {
            return Vec::new();
        };

        if let Some(cursor) = frame.cursor {
            self.cursor = cursor;
        }
        frame.repeat -= 1;
        if frame.repeat > 0 {
            return frame.events.clone();
        }

        self.pending
            .pop_front()
            .map(|frame| frame.events)
            .unwrap_or_default()
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    fn should_close(&self) -> bool {
        self.pending.is_empty()
    }

    fn present(&mut self, frame: &FrameReport) -> Result<(), EngineError> {
        log::trace!(
            "Frame {}: {} (box at {:?}, point at {:?})",
            frame.frame,
            frame.verdict,
            frame.box_transform.translation,
            frame.point_position()
        );
        self.reports.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyAction, KeyCode, MouseButton};

    #[test]
    fn test_parse_ron_script() {
        let script: InputScript = ron::from_str(
            r"(
                frames: [
                    (events: [Key(key: A, action: Press)], repeat: 3),
                    (cursor: Some((12.0, 4.5)), events: [MouseButton(button: Left, pressed: true)]),
                    (events: [CloseRequested]),
                ],
            )",
        )
        .expect("parse ron script");

        assert_eq!(script.frames.len(), 3);
        assert_eq!(script.frame_count(), 5);
        assert_eq!(script.frames[0].events, vec![InputEvent::key_press(KeyCode::A)]);
        assert_eq!(script.frames[1].cursor, Some((12.0, 4.5)));
        assert_eq!(
            script.frames[1].events,
            vec![InputEvent::MouseButton { button: MouseButton::Left, pressed: true }]
        );
        assert_eq!(script.frames[2].events, vec![InputEvent::CloseRequested]);
    }

    #[test]
    fn test_parse_toml_script() {
        let script: InputScript = toml::from_str(
            r#"
            [[frames]]
            repeat = 2
            events = [{ Key = { key = "W", action = "Repeat" } }]

            [[frames]]
            cursor = [3.0, 4.0]
            "#,
        )
        .expect("parse toml script");

        assert_eq!(script.frame_count(), 3);
        assert_eq!(
            script.frames[0].events,
            vec![InputEvent::Key { key: KeyCode::W, action: KeyAction::Repeat }]
        );
        assert_eq!(script.frames[1].cursor, Some((3.0, 4.0)));
        assert!(script.frames[1].events.is_empty());
    }

    #[test]
    fn test_cursor_carries_over_between_frames() {
        let mut frontend = ScriptedFrontend::new(InputScript {
            frames: vec![
                ScriptFrame { cursor: Some((5.0, 6.0)), ..ScriptFrame::default() },
                ScriptFrame::default(),
            ],
        });

        assert!(!frontend.should_close());
        frontend.poll_events();
        assert_eq!(frontend.cursor_position(), (5.0, 6.0));
        frontend.poll_events();
        assert_eq!(frontend.cursor_position(), (5.0, 6.0));
        assert!(frontend.should_close());
    }

    #[test]
    fn test_repeated_frames_replay_without_expansion() {
        let mut frontend = ScriptedFrontend::new(InputScript {
            frames: vec![
                ScriptFrame {
                    events: vec![InputEvent::key_press(KeyCode::D)],
                    repeat: 3,
                    ..ScriptFrame::default()
                },
                ScriptFrame { repeat: 0, ..ScriptFrame::default() },
                ScriptFrame {
                    events: vec![InputEvent::key_press(KeyCode::Space)],
                    ..ScriptFrame::default()
                },
            ],
        });
        assert_eq!(frontend.pending.len(), 2);

        for _ in 0..3 {
            assert!(!frontend.should_close());
            assert_eq!(frontend.poll_events(), vec![InputEvent::key_press(KeyCode::D)]);
        }
        assert_eq!(frontend.poll_events(), vec![InputEvent::key_press(KeyCode::Space)]);
        assert!(frontend.should_close());
        assert!(frontend.poll_events().is_empty());
    }

    #[test]
    fn test_huge_repeat_is_not_materialized() {
        let frontend = ScriptedFrontend::new(InputScript {
            frames: vec![ScriptFrame { repeat: u32::MAX, ..ScriptFrame::default() }],
        });
        assert_eq!(frontend.pending.len(), 1);
        assert!(!frontend.should_close());
    }

    #[test]
    fn test_config_file_is_rejected_as_script() {
        let result: Result<InputScript, _> = toml::from_str(include_str!("../../../../demos/demo.toml"));
        assert!(result.is_err());

        let result: Result<InputScript, _> = ron::from_str("(frames: [(events: [], pause: 2)])");
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_demo_script() {
        use crate::config::DemoConfig;
        use crate::engine::Engine;
        use crate::scene::{CollisionVerdict, ShapeId};

        let script: InputScript = ron::from_str(include_str!("../../../../demos/slide_box_into_point.ron"))
            .expect("parse bundled script");
        assert_eq!(script.frame_count(), 30);

        let mut frontend = ScriptedFrontend::new(script);
        let mut engine = Engine::from_config(&DemoConfig::default());
        engine.run(&mut frontend).expect("replay");

        let reports = frontend.reports();
        assert_eq!(reports.len(), 30);
        assert_eq!(reports[14].verdict, CollisionVerdict::Colliding);
        // Spinning the box about its own center keeps the point inside
        assert_eq!(reports[19].verdict, CollisionVerdict::Colliding);
        assert_eq!(reports[20].selected, ShapeId::Point);
        assert_eq!(reports[29].verdict, CollisionVerdict::Separated);
    }
}
