//! Core domain types for tic-tac-toe.

use super::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Player in the game, identified by the mark they write.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl FromStr for Player {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(ParseBoardError::UnknownPlayer(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Error parsing a board or player from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The board text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A cell character was neither a mark nor an empty marker.
    #[display("Unexpected cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),

    /// A player name was neither X nor O.
    #[display("Unknown player {:?} (expected X or O)", _0)]
    UnknownPlayer(#[error(not(source))] String),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Writes `player`'s mark at `pos`.
    ///
    /// The square must be empty. This is not checked in release builds;
    /// validated placement lives in [`crate::Game::place`].
    pub fn apply(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "apply on occupied square {pos}");
        self.squares[pos.to_index()] = Square::Occupied(player);
    }

    /// Resets the square at `pos` to empty.
    pub fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Applies a move that is undone when the returned guard is dropped.
    pub fn hypothetical(&mut self, pos: Position, player: Player) -> Hypothetical<'_> {
        self.apply(pos, player);
        Hypothetical {
            board: self,
            position: pos,
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|&&s| s == Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders rows as `X|1|O` separated by `-+-+-`; empty squares show their index.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{pos}")?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells: `X`, `O`, or one of `.`, `-`, `_`, space for empty.
///
/// Row separators `|`, `/`, `,` and line breaks are skipped.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | ',' | '\n' | '\r'))
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' | ' ' => Ok(Square::Empty),
                other => Err(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| ParseBoardError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// A move applied to a board for the lifetime of the guard.
///
/// Dereferences to the board so search can recurse through it; dropping
/// the guard clears the square again, restoring the board exactly.
pub struct Hypothetical<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Hypothetical<'_> {
    /// The square this guard occupies.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty square.
    InProgress,
    /// Player completed a line.
    Won(Player),
    /// Board full without a line.
    Draw,
}

impl Outcome {
    /// Returns true once the game can no longer continue.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
