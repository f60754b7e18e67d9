//! Pure tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: nine squares with unchecked `apply`/`clear` for search and
//!   a scoped [`Hypothetical`] guard that undoes a move when dropped
//! - **Rules**: win, draw and in-progress classification
//! - **Move generation**: empty squares in ascending order
//! - **Search**: [`Minimax`], which never loses
//! - **Game**: validated moves, turn order and history for the real board
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Minimax, Player, Position};
//!
//! let mut board: Board = "XX./OO./...".parse()?;
//! let engine = Minimax::new(Player::X);
//! assert_eq!(engine.find_best_move(&mut board)?, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod movegen;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError, SearchError};
pub use game::Game;
pub use movegen::available_moves;
pub use position::Position;
pub use rules::evaluate;
pub use search::{Depth, Minimax, ScoredMove, SearchReport, WIN_BASE};
pub use types::{Board, Hypothetical, Outcome, ParseBoardError, Player, Square};

/// A fresh, empty board.
pub fn initial_board() -> Board {
    Board::new()
}

/// Writes `player`'s mark at `position` without validation.
///
/// The square must be empty; use [`Game::place`] for untrusted input.
pub fn apply_move(board: &mut Board, position: Position, player: Player) {
    board.apply(position, player);
}

/// Best move for X, the engine's mark when the human opens.
pub fn find_best_move(board: &mut Board) -> Result<Position, SearchError> {
    Minimax::new(Player::X).find_best_move(board)
}
