//! Move outcomes.
//!
//! A rejected move never changes the engine. The outcome only tells the
//! caller whether the selection was taken and why not.

use super::{GameStatus, Position};
use serde::{Deserialize, Serialize};

/// Result of a cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub enum MoveOutcome {
    /// The mark was placed. Carries the status after the move.
    Accepted(GameStatus),
    /// The selection was ignored.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// Why a selection was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for RejectReason {}
