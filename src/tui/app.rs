//! Application state and logic.

use super::input::{Command, move_cursor};
use crate::config::Labels;
use crate::status::engine_status;
use ratatui::layout::Rect;
use tictac_engine::{Engine, MoveOutcome, Position};
use tracing::{debug, instrument};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the app.
    Quit,
}

/// Main application state.
///
/// Owns the engine; every command from the terminal goes through
/// [`App::handle`] or [`App::click`].
#[derive(Debug)]
pub struct App {
    engine: Engine,
    labels: Labels,
    cursor: Position,
    notice: Option<String>,
    cell_areas: Option<[Rect; 9]>,
}

impl App {
    /// Creates a new application.
    pub fn new(labels: Labels) -> Self {
        Self {
            engine: Engine::new(),
            labels,
            cursor: Position::Center,
            notice: None,
            cell_areas: None,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the mark labels.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Note about the last ignored selection, cleared by the next command.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Status line derived from the engine.
    pub fn status_line(&self) -> String {
        engine_status(&self.engine, &self.labels)
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = Some(areas);
    }

    /// Handles a command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Flow {
        self.notice = None;
        match command {
            Command::Select(pos) => self.select(pos),
            Command::SelectCursor => self.select(self.cursor),
            Command::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Command::Restart => {
                self.engine.restart();
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Handles a left click at terminal cell `(column, row)`.
    ///
    /// Clicks outside the grid do nothing.
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) -> Flow {
        match self.hit_test(column, row) {
            Some(pos) => self.handle(Command::Select(pos)),
            None => {
                debug!("Click outside the grid");
                Flow::Continue
            }
        }
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        let areas = self.cell_areas.as_ref()?;
        Position::ALL.into_iter().find(|pos| {
            let area = areas[pos.to_index()];
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
    }

    fn select(&mut self, pos: Position) {
        self.cursor = pos;
        if let MoveOutcome::Rejected(reason) = self.engine.apply_at(pos) {
            debug!(%reason, "Selection ignored");
            self.notice = Some(reason.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Direction;
    use tictac_engine::{Cell, GameStatus, Mark};

    fn grid() -> [Rect; 9] {
        let mut areas = [Rect::default(); 9];
        for pos in Position::ALL {
            areas[pos.to_index()] = Rect::new(10 + pos.col() as u16 * 6, 4 + pos.row() as u16 * 4, 5, 3);
        }
        areas
    }

    #[test]
    fn test_select_places_mark() {
        let mut app = App::new(Labels::default());
        assert_eq!(app.handle(Command::Select(Position::TopLeft)), Flow::Continue);
        assert_eq!(app.engine().cell(0, 0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(app.status_line(), "Computer's Turn");
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_cursor_select() {
        let mut app = App::new(Labels::default());
        let _ = app.handle(Command::MoveCursor(Direction::Up));
        let _ = app.handle(Command::SelectCursor);
        assert_eq!(app.engine().cell(0, 1), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_occupied_select_sets_notice() {
        let mut app = App::new(Labels::default());
        let _ = app.handle(Command::Select(Position::Center));
        let _ = app.handle(Command::Select(Position::Center));
        assert_eq!(app.notice(), Some("Center is already occupied"));
        assert_eq!(app.engine().move_count(), 1);

        let _ = app.handle(Command::MoveCursor(Direction::Left));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_restart() {
        let mut app = App::new(Labels::default());
        let _ = app.handle(Command::Select(Position::Center));
        let _ = app.handle(Command::Restart);
        assert_eq!(app.engine(), &Engine::new());
        assert_eq!(app.status_line(), "Player's Turn");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Labels::default());
        assert_eq!(app.handle(Command::Quit), Flow::Quit);
    }

    #[test]
    fn test_click_hits_cell() {
        let mut app = App::new(Labels::default());
        app.set_cell_areas(grid());
        // Bottom-right cell spans columns 22..27 and rows 12..15.
        let _ = app.click(24, 13);
        assert_eq!(app.engine().cell(2, 2), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_click_between_cells_is_ignored() {
        let mut app = App::new(Labels::default());
        app.set_cell_areas(grid());
        let _ = app.click(15, 5);
        let _ = app.click(0, 0);
        assert_eq!(app.engine().move_count(), 0);
    }

    #[test]
    fn test_click_before_first_draw_is_ignored() {
        let mut app = App::new(Labels::default());
        let _ = app.click(24, 13);
        assert_eq!(app.engine().move_count(), 0);
    }

    #[test]
    fn test_full_game_by_clicks() {
        let mut app = App::new(Labels::default());
        app.set_cell_areas(grid());
        for (column, row) in [(11, 5), (17, 9), (17, 5), (23, 9), (23, 5)] {
            let _ = app.click(column, row);
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Mark::X));
        assert_eq!(app.status_line(), "Player Wins!");

        let _ = app.click(11, 13);
        assert_eq!(app.notice(), Some("Game is already over"));
    }
}
