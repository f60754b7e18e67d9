//! Properties checked over every board reachable in legal play.

use minimax_tictactoe::{
    Board, Minimax, Outcome, Player, Position, Square, apply_move, available_moves, evaluate,
    initial_board,
};
use std::collections::HashSet;

/// Collects every reachable board, X moving first, stopping at terminal boards.
fn reachable(board: &mut Board, to_move: Player, seen: &mut HashSet<Board>) {
    if !seen.insert(*board) || evaluate(board).is_decided() {
        return;
    }
    for position in available_moves(board) {
        let mut child = board.hypothetical(position, to_move);
        reachable(&mut child, to_move.opponent(), seen);
    }
}

fn all_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut board = initial_board();
    reachable(&mut board, Player::X, &mut seen);
    assert_eq!(board, initial_board());
    seen
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct legal tic-tac-toe positions.
    assert_eq!(all_boards().len(), 5478);
}

#[test]
fn test_available_moves_are_exactly_the_empty_squares() {
    for board in all_boards() {
        let moves = available_moves(&board);
        let occupied = board
            .squares()
            .iter()
            .filter(|&&s| s != Square::Empty)
            .count();

        assert_eq!(moves.len() + occupied, 9);
        assert!(moves.windows(2).all(|w| w[0].to_index() < w[1].to_index()));
        for position in Position::ALL {
            assert_eq!(moves.contains(&position), board.is_empty(position));
        }
    }
}

#[test]
fn test_apply_then_clear_restores_every_board() {
    for board in all_boards() {
        for position in available_moves(&board) {
            for player in [Player::X, Player::O] {
                let mut scratch = board;
                apply_move(&mut scratch, position, player);
                assert_ne!(scratch, board);
                scratch.clear(position);
                assert_eq!(scratch, board);

                drop(scratch.hypothetical(position, player));
                assert_eq!(scratch, board);
            }
        }
    }
}

#[test]
fn test_evaluate_is_stable() {
    for board in all_boards() {
        let outcome = evaluate(&board);
        assert_eq!(outcome, evaluate(&board));
        if outcome == Outcome::Draw {
            assert!(available_moves(&board).is_empty());
        }
    }
}

#[test]
fn test_mark_balance_holds_for_reachable_boards() {
    for board in all_boards() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "unbalanced board:\n{board}");
    }
}

#[test]
fn test_best_move_is_always_empty_late_in_game() {
    for mut board in all_boards() {
        if evaluate(&board).is_decided() || board.empty_count() > 5 {
            continue;
        }
        let to_move = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        let before = board;
        let position = Minimax::new(to_move).find_best_move(&mut board).unwrap();
        assert!(board.is_empty(position));
        assert_eq!(board, before);
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_completed_row_wins_with_empty_squares() {
    let board: Board = "OO./XXX/O..".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Won(Player::X));
}
