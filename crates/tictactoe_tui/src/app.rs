//! Application state and input handling.

use crossterm::event::KeyCode;
use tictactoe_core::{Game, Position};
use tracing::debug;

use crate::input;

/// What the event loop should do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep running.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

/// Main application state: the game plus a board cursor.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press.
    ///
    /// Placements on occupied squares or after the game has ended are
    /// ignored by the game; the only visible effect is that nothing
    /// changes.
    pub fn handle_key(&mut self, key: KeyCode) -> Signal {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Signal::Quit,
            KeyCode::Char('r') => self.game.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !self.game.apply_move(self.cursor) {
                    debug!(cursor = %self.cursor, "Placement ignored");
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Cells are labelled 1-9 on screen.
                let slot = c.to_digit(10).map(|d| d as usize);
                if let Some(pos) = slot.and_then(|d| d.checked_sub(1)).and_then(Position::from_index)
                {
                    self.cursor = pos;
                    if !self.game.apply_move(pos) {
                        debug!(%pos, "Placement ignored");
                    }
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        Signal::Continue
    }

    /// Status line combining the game status with key hints.
    pub fn status_line(&self) -> String {
        if self.game.outcome().is_ongoing() {
            self.game.status_text()
        } else {
            format!(
                "{} Press 'r' to restart or 'q' to quit.",
                self.game.status_text()
            )
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
