//! Human-readable status line.

use crate::config::Labels;
use tictac_engine::{Engine, GameStatus, Mark};

/// Renders the status line for a game.
///
/// In progress: whose turn it is. Won: who won. Draw: a draw message.
pub fn status_text(status: GameStatus, turn: Mark, labels: &Labels) -> String {
    match status {
        GameStatus::InProgress => format!("{}'s Turn", labels.of(turn)),
        GameStatus::Won(mark) => format!("{} Wins!", labels.of(mark)),
        GameStatus::Draw => "It's a Draw!".to_string(),
    }
}

/// Renders the status line for an engine's current state.
pub fn engine_status(engine: &Engine, labels: &Labels) -> String {
    status_text(engine.status(), engine.turn(), labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = Labels::default();
        assert_eq!(status_text(GameStatus::InProgress, Mark::X, &labels), "Player's Turn");
        assert_eq!(status_text(GameStatus::InProgress, Mark::O, &labels), "Computer's Turn");
        assert_eq!(status_text(GameStatus::Won(Mark::X), Mark::X, &labels), "Player Wins!");
        assert_eq!(status_text(GameStatus::Won(Mark::O), Mark::O, &labels), "Computer Wins!");
        assert_eq!(status_text(GameStatus::Draw, Mark::X, &labels), "It's a Draw!");
    }

    #[test]
    fn test_custom_labels() {
        let labels = Labels::new("Ada", "Grace");
        assert_eq!(status_text(GameStatus::InProgress, Mark::O, &labels), "Grace's Turn");
        assert_eq!(status_text(GameStatus::Won(Mark::X), Mark::X, &labels), "Ada Wins!");
    }

    #[test]
    fn test_engine_status_follows_moves() {
        let labels = Labels::default();
        let mut engine = Engine::new();
        assert_eq!(engine_status(&engine, &labels), "Player's Turn");
        let _ = engine.apply_move(1, 1);
        assert_eq!(engine_status(&engine, &labels), "Computer's Turn");
    }
}
