//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], and the named cell
//!   [`Position`].
//! - **Rules**: pure outcome evaluation ([`evaluate`]) built from win
//!   and draw detection.
//! - **Game**: the [`Game`] state machine - alternating moves with an
//!   ignore-invalid-input policy, absorbing `Win`/`Draw` outcomes, and
//!   an unconditional reset.
//!
//! The crate has no I/O and no knowledge of any frontend; a view layer
//! feeds input events in and reads the board, turn, and outcome back
//! out.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Position};
//!
//! let mut game = Game::new();
//! assert!(game.apply_move(Position::Center));
//! // The center is taken now, so the same move is ignored.
//! assert!(!game.apply_move(Position::Center));
//! game.reset();
//! assert!(game.board().is_empty(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod outcome;
mod position;
mod rules;
mod types;

pub use game::Game;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{evaluate, is_full, winning_line};
pub use types::{Board, Player, Square};
