//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - click-to-play in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Click-to-play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file for interactive mode (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves without a UI and print the result
    Replay {
        /// Moves as `row,col` pairs separated by spaces or `;`, e.g. "0,0 1,1 0,1"
        #[arg(short, long)]
        moves: String,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
