//! Root-move analysis of an arbitrary board.

use anyhow::{Context, Result};
use minimax_tictactoe::{Board, Minimax, Player as Mark, ScoredMove, evaluate};
use serde::Serialize;
use std::fmt::Write;
use tracing::instrument;

/// Output format for analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Board and a score table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Engine view of one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board analysed.
    pub board: Board,
    /// Side the engine searched for.
    pub to_move: Mark,
    /// Root move chosen.
    pub best: ScoredMove,
    /// Every root move, ascending.
    pub scores: Vec<ScoredMove>,
    /// Positions visited.
    pub nodes: u64,
}

/// Side to move when not given: whoever has fewer marks, X on a tie.
pub fn infer_to_move(board: &Board) -> Mark {
    if board.count(Mark::O) < board.count(Mark::X) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Searches `board` for `to_move` (inferred when `None`).
#[instrument(skip(board))]
pub fn analyze(board: &str, to_move: Option<Mark>) -> Result<Analysis> {
    let mut board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let to_move = to_move.unwrap_or_else(|| infer_to_move(&board));

    let report = Minimax::new(to_move)
        .search(&mut board)
        .context("Nothing to analyse")?;

    Ok(Analysis {
        board,
        to_move,
        best: report.best,
        scores: report.scores,
        nodes: report.nodes,
    })
}

/// Renders an analysis in the requested format.
pub fn render(analysis: &Analysis, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")
        }
        Format::Text => {
            let mut out = String::new();
            writeln!(out, "{}", analysis.board)?;
            writeln!(out)?;
            writeln!(
                out,
                "{} to move ({} positions searched, board {})",
                analysis.to_move,
                analysis.nodes,
                evaluate(&analysis.board)
            )?;
            writeln!(out, "{:>6}  {:>5}", "move", "score")?;
            for scored in &analysis.scores {
                let marker = if scored.position == analysis.best.position {
                    "  <- best"
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{:>6}  {:>5}{}",
                    scored.position.to_index(),
                    scored.score,
                    marker
                )?;
            }
            Ok(out)
        }
    }
}
