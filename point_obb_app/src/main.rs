//! Point - OBB collision demo
//!
//! Move the selected shape in the XY plane with WASD and along Z with left
//! control and left shift. Drag with the left mouse button to rotate it, and
//! press space to swap which shape is selected. The window title reports
//! whether the point is inside the box.
//!
//! Without the `windowed` feature the demo runs headless from an input script.

#[cfg(feature = "windowed")]
mod window_frontend;

use std::path::{Path, PathBuf};

use argh::FromArgs;
use obb_engine::prelude::*;

#[derive(FromArgs, Debug)]
/// Point versus oriented bounding box collision demo.
struct Args {
    /// demo configuration file (.toml or .ron)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// replay an input script (.toml or .ron) instead of opening a window
    #[argh(option, short = 's')]
    script: Option<PathBuf>,

    /// write the default configuration to this path and exit
    #[argh(option)]
    write_default_config: Option<PathBuf>,

    /// log level used when RUST_LOG is not set
    #[argh(option, default = "log::LevelFilter::Info")]
    log_level: log::LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    obb_engine::foundation::logging::init(args.log_level);

    if let Some(path) = &args.write_default_config {
        DemoConfig::default().save_to_file(path)?;
        log::info!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            DemoConfig::load_from_file(path)?
        }
        None => DemoConfig::default(),
    };

    let mut engine = Engine::from_config(&config);

    let result = match &args.script {
        Some(path) => run_script(&mut engine, path),
        None => run_windowed(&mut engine, &config),
    };

    if let Err(e) = &result {
        log::error!("Application error: {e}");
    }
    result
}

/// Replay a recorded input script and print a per-run summary
fn run_script(engine: &mut Engine, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Replaying input script {}", path.display());
    let script = InputScript::load_from_file(path)?;
    let mut frontend = ScriptedFrontend::new(script);

    engine.run(&mut frontend)?;

    let reports = frontend.into_reports();
    let colliding = reports.iter().filter(|report| report.verdict.is_colliding()).count();
    println!("frames: {}", reports.len());
    println!("colliding frames: {colliding}");
    if let Some(last) = reports.last() {
        let box_position = last.box_transform.translation;
        let point_position = last.point_position();
        println!("final verdict: {}", last.verdict);
        println!("colours: {}", last.tint.describe());
        println!("selected: {}", last.selected);
        println!("box: ({:.3}, {:.3}, {:.3})", box_position.x, box_position.y, box_position.z);
        println!("point: ({:.3}, {:.3}, {:.3})", point_position.x, point_position.y, point_position.z);
    }
    Ok(())
}

#[cfg(feature = "windowed")]
fn run_windowed(engine: &mut Engine, config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Use WASD to move the selected shape in the XY plane.");
    log::info!("Use left CTRL & left shift to move the selected shape along the Z axis.");
    log::info!("Left click and drag the mouse to rotate the selected shape.");
    log::info!("Use spacebar to swap the selected shape.");

    let mut frontend = window_frontend::GlfwFrontend::new(&config.window)?;
    engine.run(&mut frontend)?;
    Ok(())
}

#[cfg(not(feature = "windowed"))]
fn run_windowed(_engine: &mut Engine, _config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    Err("built without the `windowed` feature; pass --script <file> to run headless".into())
}
