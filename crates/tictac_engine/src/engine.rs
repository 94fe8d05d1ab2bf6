//! The game engine: one board, one turn, one status.

use super::action::{MoveOutcome, RejectReason};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{has_won, is_full};
use super::{Board, Cell, GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owned by the UI layer. All mutation goes through [`Engine::apply_move`]
/// (or [`Engine::apply_at`]) and [`Engine::restart`]; everything else is a
/// read accessor. Instances are independent of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    turn: Mark,
    status: GameStatus,
}

impl Engine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// Ignored (no state change) when the coordinates are off the board, the
    /// game is over, or the cell is taken; the returned outcome says which.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        match Position::from_row_col(row, col) {
            Some(pos) => self.apply_at(pos),
            None => {
                debug!(row, col, "Selection off the board");
                MoveOutcome::Rejected(RejectReason::OutOfBounds { row, col })
            }
        }
    }

    /// Places the current mark at `pos`.
    ///
    /// Termination is evaluated in a fixed order: a win for the mover, then a
    /// full board, and only then does the turn pass to the opponent.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_at(&mut self, pos: Position) -> MoveOutcome {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Move after game end ignored");
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "Occupied cell ignored");
            return MoveOutcome::Rejected(RejectReason::Occupied(pos));
        }

        let mover = self.turn;
        self.board.set(pos, Cell::Occupied(mover));
        debug!(%pos, %mover, "Mark placed");

        if has_won(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, moves = self.move_count(), "Game won");
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.turn = mover.opponent();
        }

        self.assert_invariants();
        MoveOutcome::Accepted(self.status)
    }

    /// Resets to an empty board, X to move, game in progress.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("Game restarted");
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the mark allowed to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of marks placed in the current game.
    pub fn move_count(&self) -> usize {
        self.board.occupied()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Positions still open for play. Empty once the game is over.
    pub fn open_positions(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Captures a serializable copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            turn: self.turn,
            status: self.status,
            moves: self.move_count(),
        }
    }

    fn assert_invariants(&self) {
        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                warn!(%violation, "Engine invariant violated");
            }
            debug_assert!(violations.is_empty(), "engine invariants violated: {violations:?}");
        }
    }

    /// Builds an engine from raw parts without any validation.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(layout: &str, turn: Mark, status: GameStatus) -> Self {
        Self {
            board: Board::from_layout(layout).expect("layout must have nine cells"),
            turn,
            status,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Mark to move next.
    pub turn: Mark,
    /// Game status.
    pub status: GameStatus,
    /// Marks placed so far.
    pub moves: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut Engine, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            assert!(engine.apply_move(row, col).is_accepted(), "move ({row}, {col})");
        }
    }

    #[test]
    fn test_new_engine() {
        let engine = Engine::new();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.turn(), Mark::X);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.open_positions().len(), 9);
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.apply_move(2, 1),
            MoveOutcome::Accepted(GameStatus::InProgress)
        );
        assert_eq!(engine.cell(2, 1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = Engine::new();
        let before = engine.clone();
        assert_eq!(
            engine.apply_move(3, 0),
            MoveOutcome::Rejected(RejectReason::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_winning_move_keeps_turn_on_mover() {
        let mut engine = Engine::new();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 2)]);
        assert_eq!(engine.apply_move(0, 2), MoveOutcome::Accepted(GameStatus::Won(Mark::X)));
        assert_eq!(engine.turn(), Mark::X);
        assert!(engine.open_positions().is_empty());
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // O O X / X O X / O X X: the ninth mark fills the board and the
        // right column at once.
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[(0, 2), (0, 0), (1, 0), (0, 1), (2, 1), (1, 1), (1, 2), (2, 0)],
        );
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.apply_move(2, 2), MoveOutcome::Accepted(GameStatus::Won(Mark::X)));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut engine = Engine::new();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)]);
        assert!(engine.is_over());
        engine.restart();
        assert_eq!(engine, Engine::new());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = Engine::new();
        play(&mut engine, &[(1, 1)]);
        let json = serde_json::to_value(engine.snapshot()).expect("serialize");
        assert_eq!(json["turn"], "O");
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["moves"], 1);
    }
}
