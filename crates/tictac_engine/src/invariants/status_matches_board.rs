//! Status invariant: the recorded status agrees with the board.

use super::super::rules::{has_won, is_full, winner};
use super::super::{Engine, GameStatus};
use super::Invariant;

/// Invariant: `Won(m)` means `m` owns a line, `Draw` means a full board with
/// no line, and `InProgress` means neither.
pub struct StatusMatchesBoardInvariant;

impl Invariant<Engine> for StatusMatchesBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        match engine.status() {
            GameStatus::Won(mark) => has_won(board, mark),
            GameStatus::Draw => is_full(board) && winner(board).is_none(),
            GameStatus::InProgress => !is_full(board) && winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}
