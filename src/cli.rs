//! Command-line interface for strictly_duel.

use strictly_duel::Mode;
use clap::{Parser, Subcommand};

/// Strictly Duel - tic-tac-toe against a friend or the machine
#[derive(Parser, Debug)]
#[command(name = "strictly_duel")]
#[command(about = "Tic-tac-toe with score tracking and a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "strictly_duel.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Mode for the first game
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Seed for the machine's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play many games against the machine and print the scores as JSON
    Simulate {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}
