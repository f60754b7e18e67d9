//! Legal move enumeration.
//!
//! Search breaks ties in favour of the first move it sees, so the order
//! produced here decides which of several equally good moves is played.

use super::{Board, Position};

/// Empty squares in ascending index order.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_valid_moves_empty_board() {
        let board = Board::new();
        assert_eq!(available_moves(&board), Position::ALL.to_vec());
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let mut board = Board::new();
        board.apply(Position::TopLeft, Player::X);
        board.apply(Position::Center, Player::O);

        let valid = available_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
        assert!(valid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(available_moves(&board).is_empty());
    }
}
