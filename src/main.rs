//! Connect Four GUI
//!
//! Play Connect Four against the AI or against another player.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use connect_four::config::AppConfig;
use connect_four::ui::ConnectFourApp;

#[derive(Parser, Debug)]
#[command(name = "connect_four", about = "Connect Four with a minimax AI")]
struct Cli {
    /// Path to the TOML settings file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// AI search depth, overrides the config file
    #[arg(long)]
    difficulty: Option<u8>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Settings with command-line overrides applied, and whether the config
/// file was found. Nothing is logged here since tracing is not set up yet.
fn resolve_config(cli: &Cli) -> Result<(AppConfig, bool)> {
    let found = cli.config.exists();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;

    Ok((config, found))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, found) = resolve_config(&cli)?;

    init_tracing(&config.log_level);
    if !found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(?config, "configuration loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(move |cc| Ok(Box::new(ConnectFourApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start GUI: {e}"))
}
