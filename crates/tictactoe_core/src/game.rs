//! Game state and move handling.

use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: the board, the player to move, and the
/// current outcome.
///
/// A fresh game has an empty board, X to move, and an `Ongoing`
/// outcome. The state changes only through [`Game::apply_move`] and
/// [`Game::reset`]; once the outcome is `Win` or `Draw`, moves are
/// ignored until the game is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::Ongoing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is over this stops advancing; it is the player
    /// who would have moved next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Handles a move request at the given position.
    ///
    /// Moves into occupied squares, or after the game has ended, are
    /// ignored and leave the state untouched - an ignorable input
    /// event, not an error. Returns whether the move was accepted.
    ///
    /// An accepted move places the current player's mark, re-evaluates
    /// the outcome, and passes the turn if the game is still ongoing.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> bool {
        if !self.outcome.is_ongoing() {
            debug!("Move ignored: game is over");
            return false;
        }
        if !self.board.is_empty(pos) {
            debug!("Move ignored: square is occupied");
            return false;
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.outcome = rules::evaluate(&self.board);
        if self.outcome.is_ongoing() {
            self.to_move = self.to_move.opponent();
        }
        debug!(outcome = %self.outcome, "Move accepted");
        true
    }

    /// Resets to the initial state, discarding all prior state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Status line for display.
    pub fn status_text(&self) -> String {
        match &self.outcome {
            Outcome::Ongoing => format!("Next turn: {}", self.to_move),
            Outcome::Win { player, .. } => format!("Winner: {player}"),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }

    /// Whether the square at `pos` is a valid input target.
    ///
    /// False for occupied squares and for any square once the game is
    /// over; the view renders such squares as disabled.
    pub fn cell_enabled(&self, pos: Position) -> bool {
        self.outcome.is_ongoing() && self.board.is_empty(pos)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
