//! Strictly Minimax - tic-tac-toe against an engine that never loses.
//!
//! The game logic and search live in [`minimax_tictactoe`]. This crate
//! adds everything around it:
//!
//! - **Config**: TOML settings for turn order, marks and names
//! - **Orchestrator**: the turn loop between two [`players::Player`]s
//! - **Console / TUI**: front ends for a human
//! - **Analyze**: root scores for an arbitrary board
//!
//! # Example
//!
//! ```
//! use strictly_minimax::analyze::analyze;
//! use minimax_tictactoe::Position;
//!
//! let analysis = analyze("XX./OO./...", None)?;
//! assert_eq!(analysis.best.position, Position::TopRight);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod config;
pub mod console;
pub mod orchestrator;
pub mod players;
pub mod tui;

pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use orchestrator::{GameEvent, Orchestrator};
