//! Replays a recorded gesture script against an in-memory viewport.
//!
//! Usage: `navcam <script.json> [options.toml]`. Set `RUST_LOG=debug` to see
//! every drag step.

use std::path::{Path, PathBuf};

use glam::DVec3;
use navcam::camera::{CameraPose, OffscreenViewport, Viewport};
use navcam::input::InputEvent;
use navcam::options::Options;
use navcam::{NavError, NavigationController, Outcome};
use serde::Deserialize;

/// A recorded gesture: the starting camera and the events to replay.
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default = "default_viewport")]
    viewport: (u32, u32),
    #[serde(default)]
    camera: CameraPose,
    /// Scene bounds `[min, max]` for clipping range resets.
    #[serde(default)]
    bounds: Option<(DVec3, DVec3)>,
    events: Vec<InputEvent>,
}

fn default_viewport() -> (u32, u32) {
    (800, 600)
}

fn load_script(path: &Path) -> Result<Script, NavError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| NavError::Script(e.to_string()))
}

fn replay(script: Script, options: Options) -> OffscreenViewport {
    let mut viewport = OffscreenViewport::new(script.camera, script.viewport);
    if let Some((min, max)) = script.bounds {
        viewport = viewport.with_bounds(min, max);
    }
    let mut controller = NavigationController::with_options(options);

    for (i, event) in script.events.into_iter().enumerate() {
        match controller.handle_event(&mut viewport, event) {
            Outcome::Ignored => log::debug!("#{i} {event:?}: ignored"),
            Outcome::Interaction(mode) => {
                log::debug!("#{i} {mode} step");
            }
            outcome => log::info!("#{i} {event:?}: {outcome:?}"),
        }
    }
    viewport
}

fn run(script_path: &Path, options_path: Option<&Path>) -> Result<(), NavError> {
    let options = options_path
        .map(Options::load)
        .transpose()?
        .unwrap_or_default();
    let script = load_script(script_path)?;
    log::info!(
        "Replaying {} events on a {}x{} viewport",
        script.events.len(),
        script.viewport.0,
        script.viewport.1
    );

    let viewport = replay(script, options);
    let pose = viewport.camera();
    log::info!(
        "Final camera: position {:?}, focal point {:?}, view up {:?}",
        pose.position,
        pose.focal_point,
        pose.view_up
    );
    if pose.parallel_projection {
        log::info!("Parallel scale {:.4}", pose.parallel_scale);
    } else {
        log::info!("Distance {:.4}", pose.distance());
    }
    log::info!(
        "{} redraws, clipping range {:?}",
        viewport.redraws,
        pose.clipping_range
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        log::error!("Usage: navcam <script.json> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next().map(PathBuf::from);

    if let Err(e) = run(&script_path, options_path.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
