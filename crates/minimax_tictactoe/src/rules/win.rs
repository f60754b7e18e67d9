//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] that holds
/// three of the same mark, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(player)
            if board.get(b) == Square::Occupied(player)
                && board.get(c) == Square::Occupied(player) =>
        {
            Some(player)
        }
        _ => None,
    })
}
