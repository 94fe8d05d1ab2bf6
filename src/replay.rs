//! Headless replay of a move list.
//!
//! Parses `row,col` tokens, feeds them to a fresh engine exactly as clicks
//! would arrive, and reports the resulting board and status.

use crate::config::Labels;
use crate::status::engine_status;
use derive_more::{Display, Error};
use serde::Serialize;
use tictac_engine::{Engine, MoveOutcome, Position, RejectReason, Snapshot};
use tracing::{debug, instrument};

/// A move token that is neither `row,col` nor a cell name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{}': {}", token, reason)]
pub struct ParseMoveError {
    /// The offending token.
    pub token: String,
    /// What is wrong with it.
    pub reason: &'static str,
}

impl ParseMoveError {
    fn new(token: &str, reason: &'static str) -> Self {
        Self {
            token: token.to_string(),
            reason,
        }
    }
}

/// Parses a move list such as `"0,0 1,1; 0,1"`.
///
/// Tokens are separated by whitespace or `;`. A token is either `row,col`
/// or a cell given by keypad number (`1`-`9`) or label (`center`).
/// Coordinates are not range checked here: off-board moves are the engine's
/// to ignore.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<(usize, usize)>, ParseMoveError> {
    input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(parse_move)
        .collect()
}

fn parse_move(token: &str) -> Result<(usize, usize), ParseMoveError> {
    let Some((row, col)) = token.split_once(',') else {
        return Position::from_label_or_number(token)
            .map(|pos| (pos.row(), pos.col()))
            .ok_or_else(|| ParseMoveError::new(token, "expected row,col or a cell 1-9"));
    };
    let row = row
        .trim()
        .parse()
        .map_err(|_| ParseMoveError::new(token, "row is not a number"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| ParseMoveError::new(token, "column is not a number"))?;
    Ok((row, col))
}

/// A move the engine ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// 1-based position in the move list.
    pub index: usize,
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Why the engine ignored it.
    pub reason: String,
}

/// Result of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Final engine state.
    pub snapshot: Snapshot,
    /// Status line for the final state.
    pub status: String,
    /// Moves the engine ignored.
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    /// Plain-text rendering: board, status, then any ignored moves.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.snapshot.board, self.status);
        for rejected in &self.rejected {
            out.push_str(&format!(
                "ignored move {} ({}, {}): {}\n",
                rejected.index, rejected.row, rejected.col, rejected.reason
            ));
        }
        out
    }
}

/// Plays `moves` on a fresh engine.
#[instrument(skip(labels))]
pub fn replay(moves: &[(usize, usize)], labels: &Labels) -> ReplayReport {
    let mut engine = Engine::new();
    let mut rejected = Vec::new();

    for (i, &(row, col)) in moves.iter().enumerate() {
        if let MoveOutcome::Rejected(reason) = engine.apply_move(row, col) {
            debug!(index = i + 1, row, col, %reason, "Move ignored");
            rejected.push(rejected_move(i + 1, row, col, reason));
        }
    }

    ReplayReport {
        snapshot: engine.snapshot(),
        status: engine_status(&engine, labels),
        rejected,
    }
}

fn rejected_move(index: usize, row: usize, col: usize, reason: RejectReason) -> RejectedMove {
    RejectedMove {
        index,
        row,
        col,
        reason: reason.to_string(),
    }
}
