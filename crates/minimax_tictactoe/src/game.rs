//! Validated game wrapper for the real board.
//!
//! Search mutates boards without checking anything. Input from a human
//! goes through [`Game::place`] instead, which refuses moves that would
//! corrupt the board.

use super::invariants::{GameInvariants, InvariantSet};
use super::rules::evaluate;
use super::{
    Board, Minimax, Move, MoveError, Outcome, Player, Position, SearchError, available_moves,
};
use tracing::{debug, instrument};

/// A game in progress or finished, with turn tracking and history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    first_player: Player,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game where `first_player` moves first.
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            to_move: first_player,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at a raw board index (0-8).
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place_at(position)
    }

    /// Places the current player's mark at `position`.
    pub fn place_at(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_decided() {
            return Err(MoveError::GameOver(self.outcome));
        }

        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.to_move;
        self.board.apply(position, player);
        self.history.push(Move::new(player, position));
        self.to_move = player.opponent();
        self.outcome = evaluate(&self.board);

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "invariants violated after {player} -> {position}"
        );
        debug!(%player, %position, outcome = %self.outcome, "Move applied");

        Ok(self.outcome)
    }

    /// Lets `engine` search the real board in place.
    ///
    /// The board is lent by exclusive reference; the search leaves it as
    /// it found it. Refused unless the engine's mark is the one to move.
    pub fn best_move(&mut self, engine: &Minimax) -> Result<Position, SearchError> {
        if self.outcome.is_decided() {
            return Err(SearchError::GameOver(self.outcome));
        }
        if engine.player() != self.to_move {
            return Err(SearchError::NotEngineTurn {
                engine: engine.player(),
                to_move: self.to_move,
            });
        }

        let before = self.board;
        let result = engine.find_best_move(&mut self.board);
        debug_assert_eq!(self.board, before, "search left the board modified");
        result
    }

    /// Replays raw indices from a fresh game.
    pub fn replay(first_player: Player, indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new(first_player);
        for &index in indices {
            game.place(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// The player whose turn it is. Meaningless once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Outcome after the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty squares, ascending.
    pub fn valid_moves(&self) -> Vec<Position> {
        available_moves(&self.board)
    }
}
