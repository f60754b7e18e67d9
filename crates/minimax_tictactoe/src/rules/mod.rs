//! Game rules for tic-tac-toe.
//!
//! Pure functions over board contents. Nothing here is cached: the
//! outcome of a board is recomputed whenever it is asked for.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, LINES};

use super::{Board, Outcome};

/// Classifies a board as won, drawn, or still in progress.
///
/// Lines are checked before fullness, so a board completed by a
/// winning move is a win rather than a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_winning_last_move_is_win() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "OOO/XX./...".parse().unwrap();
        let first = evaluate(&board);
        assert_eq!(first, evaluate(&board));
        assert_eq!(first, Outcome::Won(Player::O));
    }
}
