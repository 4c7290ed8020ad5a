//! Strictly Duel - Unified CLI
//!
//! Terminal tic-tac-toe and headless batch play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_duel::{DuelConfig, GameStore, IndexSource, SeededSource, ThreadRngSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, seed } => {
            let config = DuelConfig::load_or_default(&cli.config)?.with_overrides(mode, seed, None);
            run_play(config)
        }
        Command::Simulate { games, seed } => {
            let config = DuelConfig::load_or_default(&cli.config)?.with_overrides(None, seed, games);
            run_simulate(config)
        }
    }
}

/// Run the terminal front-end, logging to a file
fn run_play(config: DuelConfig) -> Result<()> {
    // Log to file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(mode = ?config.default_mode(), seed = ?config.seed(), "Starting play");

    let source: Box<dyn IndexSource> = match config.seed() {
        Some(seed) => Box::new(SeededSource::new(*seed)),
        None => Box::new(ThreadRngSource),
    };
    strictly_duel::run_tui(GameStore::with_source(source), *config.default_mode())
}

/// Run the headless simulation and print the report
fn run_simulate(config: DuelConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = strictly_duel::run_simulation(*config.simulate_games(), *config.seed());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
