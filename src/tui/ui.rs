//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_engine::{Cell, Mark, Position, rules::winning_line};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen and returns where each cell was drawn.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], app);

    let status = match app.notice() {
        Some(notice) => format!("{}  ({})", app.status_line(), notice),
        None => app.status_line(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("click or 1-9 to play · arrows + enter · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    areas
}

/// Computes the nine cell rectangles for a board centered in `area`.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let mut areas = [Rect::default(); 9];
    for pos in Position::ALL {
        let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        areas[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area);
    }
    areas
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let areas = cell_areas(area);
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    for line in 1..3u16 {
        let y = board.y + line * (CELL_HEIGHT + 1) - 1;
        draw_separator(frame, Rect::new(board.x, y, board.width, 1).intersection(area));
        let x = board.x + line * (CELL_WIDTH + 1) - 1;
        draw_separator_vertical(frame, Rect::new(x, board.y, 1, board.height).intersection(area));
    }

    let engine = app.engine();
    let highlight = engine
        .status()
        .winner()
        .and_then(|mark| winning_line(engine.board(), mark));

    for pos in Position::ALL {
        let winning = highlight.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, areas[pos.to_index()], app, pos, winning);
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let cell = app.engine().board().get(pos);

    let (symbol, base_style) = match cell {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !app.engine().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{symbol:^width$}", width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
