//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seconds to count down before each game
    #[arg(long)]
    pub countdown: Option<f32>,

    /// Milliseconds between frames
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
