//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{Engine, Mark};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and turns alternate, so X can never fall behind O and
/// never lead by more than one.
pub struct MarkBalanceInvariant;

impl Invariant<Engine> for MarkBalanceInvariant {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Mark::X);
        let o = engine.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}
