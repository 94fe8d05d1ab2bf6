//! Tic Tac Toe - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{Cli, Command, GameConfig, logging, parse_moves, replay, tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Run the interactive terminal game
fn run_play(config: &GameConfig) -> Result<()> {
    logging::init_file(config.log())?;
    tui::run(config)
}

/// Run a headless replay and print the report
#[instrument(skip(config))]
fn run_replay(config: &GameConfig, moves: &str, json: bool) -> Result<()> {
    logging::init_stderr(config.log());

    let moves = parse_moves(moves)?;
    info!(count = moves.len(), "Replaying moves");
    let report = replay(&moves, config.labels());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
