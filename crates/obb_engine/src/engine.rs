//! Frame loop
//!
//! The engine owns the [`SimulationContext`] and drives it once per frame from
//! whatever [`Frontend`] supplies input and shows the result.

use crate::{
    config::{ConfigError, DemoConfig},
    feedback::Tint,
    foundation::{math::Vec3, time::Timer},
    input::{InputEvent, InputQueue},
    scene::{CollisionVerdict, ShapeId, ShapeTransform, SimulationContext},
};
use thiserror::Error;

/// Presentation collaborator
///
/// Windowing, rendering and native input live behind this trait. The engine
/// polls it for input once per frame and hands back a [`FrameReport`].
pub trait Frontend {
    /// Discrete input events since the previous poll, in arrival order
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Current pointer position in window coordinates
    fn cursor_position(&self) -> (f64, f64);

    /// Whether the frontend wants the loop to stop
    fn should_close(&self) -> bool;

    /// Show the outcome of a frame
    fn present(&mut self, frame: &FrameReport) -> Result<(), EngineError>;
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Collision verdict for this frame
    pub verdict: CollisionVerdict,
    /// Tint derived from the verdict
    pub tint: Tint,
    /// Shape receiving commands
    pub selected: ShapeId,
    /// Box transform after this frame's input
    pub box_transform: ShapeTransform,
    /// Point transform after this frame's input
    pub point_transform: ShapeTransform,
}

impl FrameReport {
    /// World position of the point
    pub fn point_position(&self) -> Vec3 {
        self.point_transform.world_position()
    }
}

/// Main engine struct
#[derive(Debug)]
pub struct Engine {
    simulation: SimulationContext,
    queue: InputQueue,
    timer: Timer,
    last_verdict: Option<CollisionVerdict>,
    running: bool,
}

impl Engine {
    /// Create an engine around an existing simulation
    pub fn new(simulation: SimulationContext) -> Self {
        Self {
            simulation,
            queue: InputQueue::new(),
            timer: Timer::new(),
            last_verdict: None,
            running: true,
        }
    }

    /// Create an engine from configuration
    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(SimulationContext::from_config(config))
    }

    /// Run frames until the frontend or an input event asks to stop
    pub fn run(&mut self, frontend: &mut impl Frontend) -> Result<(), EngineError> {
        log::info!("Starting main loop...");

        while self.running && !frontend.should_close() {
            self.run_frame(frontend)?;
        }

        log::info!(
            "Main loop finished after {} frames ({:.1} fps average)",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        Ok(())
    }

    /// Run a single frame: input, update, collision test, present
    pub fn run_frame(&mut self, frontend: &mut impl Frontend) -> Result<FrameReport, EngineError> {
        self.queue.extend(frontend.poll_events());
        let cursor = frontend.cursor_position();

        let events: Vec<InputEvent> = self.queue.drain().collect();
        for event in &events {
            if event.is_close_request() {
                self.quit();
            } else {
                self.simulation.handle_event(event, cursor);
            }
        }
        self.simulation.sample_pointer(cursor);

        let verdict = self.simulation.test_collision();
        self.timer.update();

        if self.last_verdict != Some(verdict) {
            log::info!("Frame {}: shapes {verdict}", self.timer.frame_count());
            self.last_verdict = Some(verdict);
        }

        let report = FrameReport {
            frame: self.timer.frame_count(),
            verdict,
            tint: Tint::from_verdict(verdict),
            selected: self.simulation.selected(),
            box_transform: self.simulation.box_transform().clone(),
            point_transform: self.simulation.point_transform().clone(),
        };

        frontend.present(&report)?;
        Ok(report)
    }

    /// Queue an event for the next frame
    pub fn queue_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        if self.running {
            log::info!("Shutdown requested");
        }
        self.running = false;
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The simulation state
    pub fn simulation(&self) -> &SimulationContext {
        &self.simulation
    }

    /// Mutable access to the simulation state
    pub fn simulation_mut(&mut self) -> &mut SimulationContext {
        &mut self.simulation
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Frontend failed to deliver input or present a frame
    #[error("Frontend error: {0}")]
    Frontend(String),

    /// Configuration or script could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
