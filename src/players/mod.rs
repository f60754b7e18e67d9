//! Player trait and implementations.

mod engine;
mod human;

pub use engine::MinimaxPlayer;
pub use human::ConsoleHuman;

use anyhow::Result;
use minimax_tictactoe::{Game, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Called only while the game is in progress and it is this
    /// player's turn.
    fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
