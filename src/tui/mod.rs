//! Terminal UI: the interactive front end of the engine.
//!
//! Translates key presses and mouse clicks into engine commands and redraws
//! from a fresh snapshot after each one.

mod app;
mod render;

pub use app::{App, MAX_NAME_LEN, Screen};
pub use render::cell_areas;

use crate::config::AppConfig;
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
use std::io;
use tictactoe_engine::Position;
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    info!("Terminal UI closed");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut area = Rect::default();
    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            render::draw(frame, app);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = cell_at(area, mouse.column, mouse.row) {
                    debug!(position = %pos, "Cell clicked");
                    app.handle_click(pos);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Cell under a screen coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let point = ratatui::layout::Position::new(column, row);
    cell_areas(area)
        .iter()
        .position(|cell| cell.contains(point))
        .and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_clicks() {
        let area = Rect::new(0, 0, 80, 24);
        let cells = cell_areas(area);
        let center = cells[Position::Center.index()];
        assert_eq!(cell_at(area, center.x + 1, center.y + 1), Some(Position::Center));
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
