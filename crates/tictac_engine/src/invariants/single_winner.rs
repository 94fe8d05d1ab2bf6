//! Single winner invariant: both marks can never own a line at once.

use super::super::rules::has_won;
use super::super::{Engine, Mark};
use super::Invariant;

/// Invariant: at most one mark owns a complete line.
///
/// Holds because the engine stops at the first win: the loser never gets
/// another move in which to complete a line of their own.
pub struct SingleWinnerInvariant;

impl Invariant<Engine> for SingleWinnerInvariant {
    fn holds(engine: &Engine) -> bool {
        !(has_won(engine.board(), Mark::X) && has_won(engine.board(), Mark::O))
    }

    fn description() -> &'static str {
        "At most one mark owns a winning line"
    }
}
