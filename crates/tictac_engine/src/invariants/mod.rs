//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every engine state
//! reachable through `apply_move` and `restart`. The engine checks them in
//! debug builds after each accepted move; tests check them directly.

pub mod mark_balance;
pub mod single_winner;
pub mod status_matches_board;
pub mod turn_matches_board;

pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;
pub use turn_matches_board::TurnMatchesBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MarkBalanceInvariant,
    TurnMatchesBoardInvariant,
    SingleWinnerInvariant,
    StatusMatchesBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, GameStatus, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let engine = Engine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = Engine::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2)] {
            assert!(engine.apply_move(row, col).is_accepted());
        }
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let engine = Engine::from_parts_unchecked("XX./.../...", Mark::X, GameStatus::InProgress);

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| v.description == MarkBalanceInvariant::description()));
        assert!(violations
            .iter()
            .any(|v| v.description == TurnMatchesBoardInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);
        assert!(TwoInvariants::check_all(&Engine::new()).is_ok());
    }
}
