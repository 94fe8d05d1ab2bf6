//! Terminal UI surface for the game.
//!
//! Owns event subscription: mouse clicks and keys are translated into
//! [`Command`]s for the [`App`], and the screen is redrawn after every event.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::{Command, Direction, key_command, move_cursor};
pub use ui::{cell_areas, draw};

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(config: &GameConfig) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.labels().clone());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut areas = [Rect::default(); 9];
        terminal.draw(|f| areas = ui::draw(f, &app))?;
        app.set_cell_areas(areas);

        let flow = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key_command(key.code) {
                Some(command) => app.handle(command),
                None => Flow::Continue,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row)
            }
            other => {
                debug!(event = ?other, "Unhandled terminal event");
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
