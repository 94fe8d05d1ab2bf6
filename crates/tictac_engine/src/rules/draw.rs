//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// Only meaningful as a draw once the win check has failed.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_layout("XOX/OXO/OX.").expect("nine cells");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_layout("XOX/OXO/OXO").expect("nine cells");
        assert!(is_full(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_with_line() {
        let board = Board::from_layout("XXX/OOX/XOO").expect("nine cells");
        assert!(is_full(&board));
        assert!(winner(&board).is_some());
    }
}
