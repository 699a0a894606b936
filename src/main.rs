use anyhow::{Context, Result, anyhow};
use clap::Parser;
use power_snake::game::GameConfig;
use power_snake::modes::{HumanMode, RoundOutcome};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "power_snake")]
#[command(version, about = "Snake with a speed-boost power-up")]
struct Cli {
    /// Write diagnostics to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// `RUST_LOG`-style directives on top of an `info` default
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let mut human_mode = HumanMode::new(GameConfig::default());
    let outcome = human_mode.run().await?;

    match outcome {
        RoundOutcome::GameOver { .. } => println!("Game over! Final score: {}", outcome.score()),
        RoundOutcome::Quit { .. } => println!("Quit with score {}", outcome.score()),
    }

    Ok(())
}
