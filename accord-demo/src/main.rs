//! accord-demo: lays out a scene and prints the resulting drawing.
//!
//! The drawing is printed either as a readable listing or as JSON that a host can
//! replay on a real surface.

mod scenes;

use std::path::{Path, PathBuf};

use accord::{Color, CosmicTextMeasurer, LayoutConfig, LayoutEngine, Size};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use scenes::{Scene, SceneParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Listing,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "accord-demo", version, about = "Lay out a scene and print its display list")]
struct Cli {
    /// Scene to lay out.
    #[arg(value_enum, default_value_t = Scene::Sample)]
    scene: Scene,

    /// Width of the scene's outer frame (0-600).
    #[arg(long, default_value_t = 300.0)]
    width: f32,

    /// Minimum width of the flexible frame.
    #[arg(long, default_value_t = 100.0)]
    min_width: f32,

    /// Maximum width of the flexible frame.
    #[arg(long, default_value_t = 400.0)]
    max_width: f32,

    /// Target width.
    #[arg(long, default_value_t = 800.0)]
    target_width: f32,

    /// Target height.
    #[arg(long, default_value_t = 400.0)]
    target_height: f32,

    /// JSON layout configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Measure text with system fonts instead of the monospace estimate.
    #[arg(long)]
    shaped_text: bool,

    #[arg(long, value_enum, default_value_t = Format::Listing)]
    format: Format,
}

fn load_config(path: Option<&Path>) -> Result<LayoutConfig> {
    let Some(path) = path else {
        // The host outlines the target in green unless told otherwise.
        return Ok(LayoutConfig {
            debug_outline: Some((Color::GREEN, 2.0)),
            ..LayoutConfig::default()
        });
    };
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !(0.0..=600.0).contains(&cli.width) {
        tracing::warn!(width = cli.width, "width outside 0-600");
    }

    let config = load_config(cli.config.as_deref())?;
    let params = SceneParams {
        width: cli.width,
        min_width: cli.min_width,
        max_width: cli.max_width,
    };
    let target = Size::new(cli.target_width, cli.target_height);
    tracing::info!(scene = ?cli.scene, ?params, ?target, "laying out");

    let root = scenes::build(cli.scene, params);
    let shaper;
    let mut engine = LayoutEngine::new(&config);
    if cli.shaped_text {
        shaper = CosmicTextMeasurer::new();
        engine = engine.measurer(&shaper);
    }
    let drawing = engine.layout(&root, target).context("layout failed")?;

    match cli.format {
        Format::Listing => print!("{drawing}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&drawing)?),
    }
    Ok(())
}
