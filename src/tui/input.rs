//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use minimax_tictactoe::Position;

/// Moves the cursor one square with the arrow keys, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to squares, numbered as on screen.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        digit => Position::from_index(digit as usize - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
        assert_eq!(digit_position('a'), None);
    }
}
