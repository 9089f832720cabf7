//! Stateless rendering of the terminal UI.

use super::app::{App, Screen};
use crate::input::keypad_digit;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameSnapshot, Mark, Position, SIZE, Seat};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions shared by drawing and click handling.
struct Regions {
    title: Rect,
    body: Rect,
    status: Rect,
    help: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);
    Regions {
        title: chunks[0],
        body: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Screen rectangles of the nine cells, in row-major order.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board = center_rect(regions(area).body, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = split_with_separators(board, Direction::Vertical, CELL_HEIGHT);
    std::array::from_fn(|i| {
        let cols = split_with_separators(rows[i / SIZE], Direction::Horizontal, CELL_WIDTH);
        cols[i % SIZE]
    })
}

/// Splits `area` into three cells of `len` with one-cell separators between.
fn split_with_separators(area: Rect, direction: Direction, len: u16) -> [Rect; 3] {
    let parts = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Length(len),
            Constraint::Length(1),
            Constraint::Length(len),
            Constraint::Length(1),
            Constraint::Length(len),
        ])
        .split(area);
    [parts[0], parts[2], parts[4]]
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let regions = regions(area);
    let snapshot = app.snapshot();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    let (status, help) = match app.screen() {
        Screen::Naming => {
            draw_naming(frame, regions.body, app);
            (
                "Enter player names".to_string(),
                "Tab: switch field  Enter: start  Esc: quit",
            )
        }
        Screen::Playing => {
            draw_board(frame, area, &snapshot, app.cursor());
            (
                snapshot.status_message(),
                "Arrows/Enter or 1-9 or click: move  r: reset  n: new players  q: quit",
            )
        }
    };

    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, regions.status);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, regions.help);
}

fn draw_naming(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (seat, field) in [Seat::One, Seat::Two].into_iter().zip(fields.iter()) {
        let focused = app.focus() == seat;
        let border = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = app.name_input(seat).to_string();
        if focused {
            text.push('_');
        }
        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!("{} ({})", seat, seat.mark())),
        );
        frame.render_widget(input, *field);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
    let cells = cell_areas(area);
    let board = center_rect(regions(area).body, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = split_with_separators(board, Direction::Vertical, CELL_HEIGHT);

    for pair in rows.windows(2) {
        let sep = Rect::new(board.x, pair[0].bottom(), board.width, 1);
        let line = Paragraph::new("─".repeat(board.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, sep);
    }
    for row in rows {
        let cols = split_with_separators(row, Direction::Horizontal, CELL_WIDTH);
        for pair in cols.windows(2) {
            let sep = Rect::new(pair[0].right(), row.y, 1, row.height);
            let bar = Paragraph::new(vec![Line::from("│"); row.height as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(bar, sep);
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, cells[pos.index()], snapshot, cursor, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position, pos: Position) {
    let (symbol, mut style) = match snapshot.mark_at(pos) {
        None => (keypad_digit(pos).to_string(), Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = snapshot
        .winning_line
        .is_some_and(|line| line.contains(&pos));
    if on_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == cursor && !snapshot.is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the symbol in the cell.
    let padding = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); padding as usize];
    lines.push(Line::from(Span::styled(format!(" {} ", symbol), style)));
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_areas_are_disjoint_and_ordered() {
        let cells = cell_areas(Rect::new(0, 0, 80, 24));
        for (i, a) in cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
        assert!(cells[0].x < cells[1].x && cells[1].x < cells[2].x);
        assert!(cells[0].y < cells[3].y && cells[3].y < cells[6].y);
    }
}
