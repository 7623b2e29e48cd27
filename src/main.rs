// Availability Grid replay tool
// Feeds a recorded pointer script through the drag controller and prints the result

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use availability_grid::services::geometry::TimeGeometry;
use availability_grid::services::persistence::{load_snapshot, save_snapshot};
use availability_grid::services::settings::SettingsService;
use availability_grid::{
    AvailabilityEngine, AvailabilityKind, DragController, GridSettings, PointerEvent,
};

const USAGE: &str =
    "usage: availability-grid <script.json> [--settings grid.toml] [--snapshot availability.json]";

/// A recorded gesture session. Without `height` the grid is one pixel per minute.
#[derive(Debug, Deserialize)]
struct ReplayScript {
    #[serde(default = "default_term")]
    term: String,
    #[serde(default)]
    mode: AvailabilityKind,
    #[serde(default)]
    top: f32,
    height: Option<f32>,
    events: Vec<PointerEvent>,
}

fn default_term() -> String {
    "default".to_string()
}

struct Args {
    script: PathBuf,
    settings: Option<PathBuf>,
    snapshot: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut script = None;
    let mut settings = None;
    let mut snapshot = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                settings = Some(args.next().ok_or_else(|| anyhow!("--settings needs a path"))?.into())
            }
            "--snapshot" => {
                snapshot = Some(args.next().ok_or_else(|| anyhow!("--snapshot needs a path"))?.into())
            }
            "-h" | "--help" => bail!(USAGE),
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            other => bail!("unexpected argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(Args {
        script: script.ok_or_else(|| anyhow!(USAGE))?,
        settings,
        snapshot,
    })
}

fn load_settings(path: Option<&Path>) -> Result<GridSettings> {
    let service = match path {
        Some(path) => SettingsService::new(path),
        None => match SettingsService::from_default_location() {
            Some(service) => service,
            None => return Ok(GridSettings::default()),
        },
    };
    service.get()
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let settings = load_settings(args.settings.as_deref())?;

    let content = fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: ReplayScript = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;

    log::info!(
        "Replaying {} event(s) for term {}",
        script.events.len(),
        script.term
    );

    let mut engine = AvailabilityEngine::for_term(settings.clone(), script.term.as_str());
    if let Some(path) = &args.snapshot {
        let saved = load_snapshot(path)?;
        if !saved.availabilities.is_empty() && !engine.load_snapshot(saved) {
            log::warn!("Snapshot {} is for another term, starting empty", path.display());
        }
    }

    let height = script.height.unwrap_or(settings.grid_minutes() as f32);
    let mut controller = DragController::new(TimeGeometry::new(script.top, height, &settings));
    controller.set_mode(script.mode);

    for event in script.events {
        let outcome = controller.handle(&mut engine, event);
        log::debug!("{:?} -> {:?}", event, outcome);
    }
    if controller.is_dragging() {
        log::warn!("Script ended mid-gesture; live blocks are printed as they stand");
    }

    for interval in engine.store().canonical() {
        println!("{}", interval);
    }

    if let Some(path) = &args.snapshot {
        save_snapshot(path, &engine.snapshot())?;
    }

    Ok(())
}
