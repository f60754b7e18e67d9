//! Player backed by the minimax engine.

use super::Player;
use anyhow::{Context, Result};
use minimax_tictactoe::{Game, Minimax, Player as Mark, Position};
use tracing::{debug, instrument};

/// Plays optimally for its mark.
pub struct MinimaxPlayer {
    name: String,
    engine: Minimax,
}

impl MinimaxPlayer {
    /// Creates an engine player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            engine: Minimax::new(mark),
        }
    }

    /// The underlying search engine.
    pub fn engine(&self) -> &Minimax {
        &self.engine
    }

    /// The mark this player moves for.
    pub fn mark(&self) -> Mark {
        self.engine.player()
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(ai = %self.name, mark = %self.engine.player()))]
    fn get_move(&mut self, game: &Game) -> Result<Position> {
        if game.to_move() != self.engine.player() {
            anyhow::bail!("{} asked to move on {}'s turn", self.name, game.to_move());
        }

        // Search needs a mutable board; it is restored before returning.
        let mut board = *game.board();
        let position = self
            .engine
            .find_best_move(&mut board)
            .with_context(|| format!("{} could not choose a move", self.name))?;

        debug!(position = position.to_index(), "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_winning_square() {
        // X: 0, 1 ; O: 3, 4 ; X to move
        let game = Game::replay(Mark::X, &[0, 3, 1, 4]).unwrap();
        let mut ai = MinimaxPlayer::new("AI", Mark::X);
        assert_eq!(ai.get_move(&game).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_refuses_out_of_turn() {
        let game = Game::new(Mark::O);
        let mut ai = MinimaxPlayer::new("AI", Mark::X);
        assert!(ai.get_move(&game).is_err());
    }

    #[test]
    fn test_refuses_finished_game() {
        // O: 0, 1, 2 ; X: 3, 4
        let game = Game::replay(Mark::O, &[0, 3, 1, 4, 2]).unwrap();
        let mut ai = MinimaxPlayer::new("AI", Mark::X);
        let err = ai.get_move(&game).unwrap_err();
        assert!(err.to_string().contains("could not choose a move"));
    }
}
