//! Application state and key handling for the terminal UI.

use crate::config::AppConfig;
use crate::input::from_keypad;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::{Game, GameSnapshot, Position, Seat};
use tracing::{debug, info, instrument};

/// Longest display name the naming screen accepts.
pub const MAX_NAME_LEN: usize = 20;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Two name inputs and a start action.
    Naming,
    /// The board.
    Playing,
}

/// Main application state.
///
/// Owns the one [`Game`] it drives; the screen is redrawn from
/// [`App::snapshot`] after every key.
#[derive(Debug)]
pub struct App {
    game: Game,
    screen: Screen,
    names: [String; 2],
    focus: Seat,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates the app on the naming screen, prefilled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: Game::with_names(config.player_one(), config.player_two()),
            screen: Screen::Naming,
            names: [config.player_one().clone(), config.player_two().clone()],
            focus: Seat::One,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Game state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Name being typed for a seat.
    pub fn name_input(&self, seat: Seat) -> &str {
        match seat {
            Seat::One => &self.names[0],
            Seat::Two => &self.names[1],
        }
    }

    /// Name input that receives typing.
    pub fn focus(&self) -> Seat {
        self.focus
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::Naming => self.handle_naming_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
        }
    }

    /// Handles a click that landed on a cell.
    pub fn handle_click(&mut self, pos: Position) {
        if self.screen == Screen::Playing {
            self.cursor = pos;
            self.place(pos);
        }
    }

    fn handle_naming_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
            }
            KeyCode::Backspace => {
                self.focused_name().pop();
            }
            KeyCode::Char(c) if !c.is_control() => {
                let name = self.focused_name();
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
            }
            _ => {}
        }
    }

    fn focused_name(&mut self) -> &mut String {
        match self.focus {
            Seat::One => &mut self.names[0],
            Seat::Two => &mut self.names[1],
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.game.reset_game(),
            KeyCode::Char('n') => {
                self.game.reset_game();
                self.screen = Screen::Naming;
            }
            KeyCode::Up => self.cursor = self.cursor.step(-1, 0),
            KeyCode::Down => self.cursor = self.cursor.step(1, 0),
            KeyCode::Left => self.cursor = self.cursor.step(0, -1),
            KeyCode::Right => self.cursor = self.cursor.step(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = from_keypad(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            _ => {}
        }
    }

    /// Applies the typed names and shows the board.
    fn start(&mut self) {
        let [one, two] = &self.names;
        // Entering the naming screen always resets, so the game is fresh here.
        if let Err(e) = self.game.rename_players(one, two) {
            debug!(error = %e, "Names kept");
        }
        let players = self.game.players();
        self.names = [players[0].name().clone(), players[1].name().clone()];
        self.screen = Screen::Playing;
        info!(player_one = %self.names[0], player_two = %self.names[1], "Game started");
    }

    /// Plays at `pos`; occupied cells and finished games are ignored.
    fn place(&mut self, pos: Position) {
        if let Err(e) = self.game.play(pos) {
            debug!(position = %pos, error = %e, "Click ignored");
        }
    }
}
