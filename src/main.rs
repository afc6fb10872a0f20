use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mockup_canvas::config::{ConfigError, EditorConfig};
use mockup_canvas::doc::{ContentObject, ObjectId};
use mockup_canvas::engine::Engine;
use mockup_canvas::garment::{Backdrop, GarmentSide};
use mockup_canvas::input::PointerEvent;
use mockup_canvas::surface::MemorySurface;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("failed to read script {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid script JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Parser, Debug)]
#[command(name = "mockup-replay", about = "Replay scripted pointer gestures against the mockup canvas engine")]
struct Cli {
    /// JSON script: optional garment image size, content objects, and ordered events.
    #[arg(long)]
    script: PathBuf,

    /// Garment side to report (overrides MOCKUP_SIDE).
    #[arg(long)]
    side: Option<GarmentSide>,

    /// Pretty-print the resulting JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ImageSize {
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct Script {
    /// Garment image size; the content group is centred on the stage when present.
    #[serde(default)]
    image: Option<ImageSize>,
    #[serde(default)]
    objects: Vec<ContentObject>,
    #[serde(default)]
    events: Vec<ScriptEvent>,
}

/// Live node values a gesture has reached; absent fields stay as they are.
#[derive(Debug, Clone, Copy, Deserialize)]
struct LiveNode {
    id: ObjectId,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    rotation: Option<f64>,
    #[serde(default)]
    scale_x: Option<f64>,
    #[serde(default)]
    scale_y: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScriptEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    Click(PointerEvent),
    DragStart { id: ObjectId },
    DragEnd { id: ObjectId },
    TransformStart { id: ObjectId },
    /// Moves a node the way the surface would mid-gesture.
    Live(LiveNode),
    TransformEnd { id: ObjectId },
    Unmount { id: ObjectId },
    Escape,
}

#[derive(Debug, Serialize)]
struct Report {
    side: GarmentSide,
    image: String,
    selection: Vec<ObjectId>,
    attached: Vec<ObjectId>,
    objects: Vec<ContentObject>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, ReplayError> {
    let mut config = EditorConfig::from_env()?;
    if let Some(side) = cli.side {
        config.side = side;
    }

    let raw = fs::read_to_string(&cli.script)
        .map_err(|source| ReplayError::Read { path: cli.script.display().to_string(), source })?;
    let script: Script = serde_json::from_str(&raw)?;

    let report = replay(script, &config);
    let out = if cli.pretty { serde_json::to_string_pretty(&report)? } else { serde_json::to_string(&report)? };
    Ok(out)
}

fn replay(script: Script, config: &EditorConfig) -> Report {
    let backdrop = match script.image {
        Some(img) => Backdrop::centered(config.stage_width, config.stage_height, img.width, img.height),
        None => Backdrop::default(),
    };
    let mut engine = Engine::with_backdrop(MemorySurface::new(), backdrop);
    for obj in script.objects {
        engine.surface_mut().mount(&obj);
        let id = obj.id;
        engine.insert_object(obj);
        engine.on_object_mounted(id);
    }

    tracing::info!(events = script.events.len(), side = %config.side, "replaying script");
    for event in &script.events {
        let actions = dispatch(&mut engine, event);
        tracing::debug!(?event, actions = actions.len(), "event applied");
    }

    let objects: Vec<ContentObject> = engine.core.doc.sorted_objects().into_iter().cloned().collect();
    Report {
        side: config.side,
        image: config.image_path().to_string(),
        selection: engine.selection(),
        attached: engine.surface().attached().to_vec(),
        objects,
    }
}

fn dispatch(engine: &mut Engine<MemorySurface>, event: &ScriptEvent) -> Vec<mockup_canvas::engine::Action> {
    match event {
        ScriptEvent::PointerDown(ev) => engine.on_pointer_down(ev),
        ScriptEvent::PointerMove(ev) => engine.on_pointer_move(ev),
        ScriptEvent::PointerUp(ev) => engine.on_pointer_up(ev),
        ScriptEvent::Click(ev) => engine.on_click(ev),
        ScriptEvent::DragStart { id } => engine.on_drag_start(*id),
        ScriptEvent::DragEnd { id } => engine.on_drag_end(*id),
        ScriptEvent::TransformStart { id } => {
            engine.on_transform_start(*id);
            Vec::new()
        }
        ScriptEvent::Live(live) => {
            apply_live(engine.surface_mut(), live);
            Vec::new()
        }
        ScriptEvent::TransformEnd { id } => engine.on_transform_end(*id),
        ScriptEvent::Unmount { id } => {
            engine.surface_mut().unmount(id);
            engine.on_object_unmounted(id)
        }
        ScriptEvent::Escape => engine.clear_selection(),
    }
}

fn apply_live(surface: &mut MemorySurface, live: &LiveNode) {
    let Some(node) = surface.node_mut(&live.id) else {
        tracing::debug!(id = %live.id, "live update for unmounted node ignored");
        return;
    };
    if let Some(x) = live.x {
        node.x = x;
    }
    if let Some(y) = live.y {
        node.y = y;
    }
    if let Some(r) = live.rotation {
        node.rotation = r;
    }
    if let Some(sx) = live.scale_x {
        node.scale_x = sx;
    }
    if let Some(sy) = live.scale_y {
        node.scale_y = sy;
    }
}
