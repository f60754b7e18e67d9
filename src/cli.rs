//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use minimax_tictactoe::Player as Mark;
use std::path::PathBuf;
use strictly_minimax::analyze::Format;

/// Strictly Minimax - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Let the engine open the game
    #[arg(long, global = true)]
    pub engine_first: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the console, typing square numbers 0-8
    Play,

    /// Play in the terminal UI
    Tui,

    /// Score every legal move on a board
    Analyze {
        /// Nine cells, e.g. "XX./OO./..." (X, O, or . for empty)
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long)]
        to_move: Option<Mark>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}
