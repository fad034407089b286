//! # MeloD Config Inspector
//!
//! Loads a MeloD project configuration, follows it to the song configuration
//! and logs every typed value the player reads. Arbitrary data paths can be
//! resolved with `--query`.
//!
//! # Usage
//!
//! ```bash
//! # Inspect the default project config (config/project.toml)
//! melod
//!
//! # Explicit project config, song override
//! melod --config my/project.toml --song my/songs/waltz.toml
//!
//! # Resolve data paths
//! melod -q printer/x_dim -q song/config_filepath
//! melod --separator . -q printer.x_dim
//! ```

#![deny(warnings)]

use clap::Parser;
use melod::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// MeloD Config Inspector - load and query project and song configuration
#[derive(Parser, Debug)]
#[command(name = "melod")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Load and query MeloD project and song configuration")]
#[command(long_about = None)]
struct Args {
    /// Path to the project configuration file.
    #[arg(short, long, default_value = DEFAULT_PROJECT_CONFIG)]
    config: PathBuf,

    /// Song configuration file. Overrides `song/config_filepath` from the project config.
    #[arg(long, value_name = "FILE")]
    song: Option<PathBuf>,

    /// Resolve a data path in the project config (can be specified multiple times)
    #[arg(short, long = "query", value_name = "PATH", action = clap::ArgAction::Append)]
    queries: Vec<String>,

    /// Separator used to split query paths
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    if let Err(e) = run(&args) {
        error!("melod failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    info!("MeloD config inspector v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut project = ProjectConfig::new();
    project.try_load(&args.config)?;
    info!("Loaded project config from {}", args.config.display());

    // Queries only need the project config.
    if !args.queries.is_empty() {
        for query in &args.queries {
            let value = project.value_with(query, &args.separator)?;
            println!("{query} = {}", render(value));
        }
        return Ok(());
    }

    let (x, y, z) = project.printer_angles_per_step()?;
    info!("Angles per step: x={x} y={y} z={z}");
    let (x, y, z) = project.printer_rot_distance_per_rev()?;
    info!("Rotation distance per rev (mm): x={x} y={y} z={z}");
    let (x, y, z) = project.printer_dimensions()?;
    info!("Dimensions: x={x} y={y} z={z}");

    let song_path = match &args.song {
        Some(path) => path.clone(),
        None => song_config_location(&args.config, project.song_config_path()?),
    };

    let mut song = SongConfig::new();
    song.try_load(&song_path)?;
    info!("Loaded song config from {}", song_path.display());

    let (name, directory) = song.song_properties()?;
    info!("Song: {name} ({})", directory.display());
    info!("Tempo: {}", song.song_tempo()?);
    let (x, y, z) = song.song_octaves_adjustment()?;
    info!("Octave adjustment: x={x} y={y} z={z}");

    Ok(())
}

/// Resolve the song config path against the project config's directory.
fn song_config_location(project_config: &Path, song_config: &Path) -> PathBuf {
    if song_config.is_absolute() {
        return song_config.to_path_buf();
    }
    project_config
        .parent()
        .unwrap_or(Path::new("."))
        .join(song_config)
}

/// Render a resolved value for stdout. Strings are printed without quotes.
fn render(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
