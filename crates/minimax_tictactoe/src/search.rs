//! Exhaustive minimax search.
//!
//! Every continuation from the given board is explored; there is no
//! pruning or transposition table. The full tree from an empty board is
//! under 550k nodes, so brute force is fast enough for 3x3. Alpha-beta or
//! memoisation would slot into [`Minimax::search_node`] for larger boards.
//!
//! Scores are from the engine's point of view. A win found at depth `d`
//! scores `WIN_BASE - d` and a loss `d - WIN_BASE`, so quicker wins and
//! slower losses are preferred. Draws score zero.

use super::rules::evaluate;
use super::{Board, Outcome, Player, Position, SearchError, available_moves};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a win found one ply below the root.
///
/// Must exceed the deepest possible ply (9) so that every win outranks
/// every draw.
pub const WIN_BASE: i32 = 10;

/// Plies below the root move being scored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display,
)]
pub struct Depth(u8);

impl Depth {
    /// Depth of the position reached by the root move.
    pub const ROOT: Depth = Depth(0);

    /// The following ply.
    pub fn next(self) -> Self {
        Depth(self.0 + 1)
    }

    /// Depth as a score offset.
    pub fn as_score(self) -> i32 {
        i32::from(self.0)
    }
}

/// A root move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate move.
    pub position: Position,
    /// Minimax value after playing it.
    pub score: i32,
}

/// Everything a root search produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The move the engine plays.
    pub best: ScoredMove,
    /// Every root move in generator order.
    pub scores: Vec<ScoredMove>,
    /// Positions visited, root children included.
    pub nodes: u64,
}

/// Minimax engine playing `player`'s mark as the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    player: Player,
}

impl Minimax {
    /// Creates an engine that moves for `player`.
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    /// The mark the engine plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Scores `board` by exploring every continuation.
    ///
    /// `maximizing` says whose ply it is: the engine's when true, the
    /// opponent's when false. The board is restored before returning.
    pub fn minimax(&self, board: &mut Board, depth: Depth, maximizing: bool) -> i32 {
        let mut nodes = 0;
        self.search_node(board, depth, maximizing, &mut nodes)
    }

    /// Root scores for every legal move, in generator order.
    pub fn score_moves(&self, board: &mut Board) -> Result<Vec<ScoredMove>, SearchError> {
        self.search(board).map(|report| report.scores)
    }

    /// Picks the engine's move: the first move with the highest score.
    pub fn find_best_move(&self, board: &mut Board) -> Result<Position, SearchError> {
        self.search(board).map(|report| report.best.position)
    }

    /// Runs a full root search.
    ///
    /// Refuses boards that are already won or drawn.
    #[instrument(skip(self, board), fields(player = %self.player))]
    pub fn search(&self, board: &mut Board) -> Result<SearchReport, SearchError> {
        let outcome = evaluate(board);
        if outcome.is_decided() {
            return Err(SearchError::GameOver(outcome));
        }

        let mut nodes = 0;
        let scores: Vec<ScoredMove> = available_moves(board)
            .into_iter()
            .map(|position| {
                let mut child = board.hypothetical(position, self.player);
                let score = self.search_node(&mut child, Depth::ROOT, false, &mut nodes);
                ScoredMove { position, score }
            })
            .collect();

        // Strict comparison keeps the earliest of equally scored moves.
        let mut best: Option<ScoredMove> = None;
        for &scored in &scores {
            if best.is_none_or(|b| scored.score > b.score) {
                best = Some(scored);
            }
        }
        let best = best.ok_or(SearchError::NoMoves)?;

        debug!(
            best = %best.position,
            score = best.score,
            nodes,
            "Search complete"
        );
        Ok(SearchReport {
            best,
            scores,
            nodes,
        })
    }

    fn search_node(
        &self,
        board: &mut Board,
        depth: Depth,
        maximizing: bool,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        match evaluate(board) {
            Outcome::Won(winner) if winner == self.player => return WIN_BASE - depth.as_score(),
            Outcome::Won(_) => return depth.as_score() - WIN_BASE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let mark = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in available_moves(board) {
            let mut child = board.hypothetical(position, mark);
            let score = self.search_node(&mut child, depth.next(), !maximizing, nodes);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_win_scores_win_base() {
        let mut board: Board = "XX./OO./...".parse().unwrap();
        let engine = Minimax::new(Player::X);
        let scores = engine.score_moves(&mut board).unwrap();
        assert_eq!(scores[0].position, Position::TopRight);
        assert_eq!(scores[0].score, WIN_BASE);
    }

    #[test]
    fn test_terminal_scores_are_depth_adjusted() {
        let engine = Minimax::new(Player::O);
        let mut won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(engine.minimax(&mut won, Depth::ROOT.next(), true), WIN_BASE - 1);

        let mut lost: Board = "XXX/OO./O..".parse().unwrap();
        assert_eq!(engine.minimax(&mut lost, Depth::ROOT.next().next(), false), 2 - WIN_BASE);

        let mut drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(engine.minimax(&mut drawn, Depth::ROOT, true), 0);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        let engine = Minimax::new(Player::X);
        engine.minimax(&mut board, Depth::ROOT, true);
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        let mut board = Board::new();
        let engine = Minimax::new(Player::X);
        assert_eq!(engine.minimax(&mut board, Depth::ROOT, true), 0);
    }

    #[test]
    fn test_ties_go_to_first_move() {
        // Both 2 and 6 complete a line for X.
        let mut board: Board = "XX./XOO/.O.".parse().unwrap();
        let engine = Minimax::new(Player::X);
        let report = engine.search(&mut board).unwrap();
        let positions: Vec<_> = report.scores.iter().map(|s| s.position).collect();
        assert_eq!(
            positions,
            vec![Position::TopRight, Position::BottomLeft, Position::BottomRight]
        );
        assert_eq!(report.scores[0].score, WIN_BASE);
        assert_eq!(report.scores[1].score, WIN_BASE);
        assert!(report.scores[2].score < WIN_BASE);
        assert_eq!(report.best.position, Position::TopRight);
    }

    #[test]
    fn test_search_refuses_finished_board() {
        let engine = Minimax::new(Player::X);
        let mut won: Board = "OOO/XX./...".parse().unwrap();
        assert_eq!(
            engine.find_best_move(&mut won),
            Err(SearchError::GameOver(Outcome::Won(Player::O)))
        );
        let mut full: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(
            engine.find_best_move(&mut full),
            Err(SearchError::GameOver(Outcome::Draw))
        );
    }

    #[test]
    fn test_report_counts_nodes() {
        let mut board: Board = "XOX/XOO/O..".parse().unwrap();
        let report = Minimax::new(Player::X).search(&mut board).unwrap();
        // Two root children, each with exactly one reply.
        assert_eq!(report.nodes, 4);
        assert_eq!(report.best.position, Position::BottomCenter);
        assert_eq!(report.scores[1].score, 1 - WIN_BASE);
    }
}
