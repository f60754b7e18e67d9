//! Move records and the errors raised when moves or searches are refused.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating a move against the real board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}

/// Error returned when the engine is asked to move on a finished board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board already has an outcome.
    #[display("Cannot search a finished game ({})", _0)]
    GameOver(Outcome),

    /// The engine was asked to move for the side that is not on turn.
    #[display("Engine plays {} but {} is to move", engine, to_move)]
    NotEngineTurn {
        /// Mark the engine searches for.
        engine: Player,
        /// Mark whose turn it is.
        to_move: Player,
    },

    /// No empty square remains.
    #[display("No legal moves available")]
    NoMoves,
}

impl std::error::Error for SearchError {}
