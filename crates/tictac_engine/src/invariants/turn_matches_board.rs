//! Turn invariant: the side to move follows from the mark counts.

use super::super::{Engine, Mark};
use super::Invariant;

/// Invariant: while the game is in progress, X is to move exactly when both
/// marks have been placed equally often.
///
/// Once the game ends the turn stays on the player who made the final move,
/// so it is not constrained here.
pub struct TurnMatchesBoardInvariant;

impl Invariant<Engine> for TurnMatchesBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        if engine.is_over() {
            return true;
        }
        let board = engine.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        engine.turn() == expected
    }

    fn description() -> &'static str {
        "Turn alternates X, O, X, ... with the board"
    }
}
