//! Human player reading moves from a line-oriented stream.

use super::Player;
use anyhow::{Context, Result};
use derive_new::new;
use minimax_tictactoe::{Game, Position};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Human player typing square numbers (0-8) or labels.
///
/// Bad input is reported and asked for again; it never reaches the board.
#[derive(new)]
pub struct ConsoleHuman<R, W> {
    #[new(into)]
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Player for ConsoleHuman<R, W> {
    fn get_move(&mut self, game: &Game) -> Result<Position> {
        loop {
            write!(self.output, "Enter your move (0-8): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed");
            }

            let Some(position) = Position::from_label_or_number(&line) else {
                debug!(input = line.trim(), "Unparseable move");
                writeln!(self.output, "Invalid input. Enter a number between 0 and 8.")?;
                continue;
            };

            if !game.board().is_empty(position) {
                warn!(position = position.to_index(), "Square already taken");
                writeln!(self.output, "Invalid move. Try again.")?;
                continue;
            }

            return Ok(position);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
