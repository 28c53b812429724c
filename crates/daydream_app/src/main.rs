//! Daydream demo
//!
//! Runs the caption panel demo headlessly with scripted input.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use daydream_app::{run, AppConfig};
use daydream_platform::{Button, RomfsLoader, ScriptedEventLoop};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "daydream-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Daydream caption panel demo", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory mounted as romfs:/ (overrides the config file)
    #[arg(long)]
    romfs: Option<PathBuf>,

    /// Maximum number of frames to run
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Press ZR on this frame (repeatable)
    #[arg(long = "press-zr", value_name = "FRAME")]
    press_zr: Vec<u64>,

    /// Press Plus on this frame to quit
    #[arg(long, value_name = "FRAME")]
    quit_at: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(romfs) = cli.romfs {
        config.assets.romfs = romfs;
    }

    let loader = RomfsLoader::mount(&config.assets.romfs);
    info!("romfs mounted at {}", config.assets.romfs.display());

    let mut event_loop = ScriptedEventLoop::new(cli.frames);
    for frame in cli.press_zr {
        event_loop = event_loop.press_at(frame, Button::ZR);
    }
    if let Some(frame) = cli.quit_at {
        event_loop = event_loop.press_at(frame, Button::Plus);
    }

    let summary = run(&config, loader, event_loop)?;
    println!(
        "{} frames, {} presented, {} with caption",
        summary.frames, summary.frames_presented, summary.caption_frames
    );
    Ok(())
}
