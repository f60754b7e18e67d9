//! Line-based game on stdin/stdout.

use crate::config::GameConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{ConsoleHuman, MinimaxPlayer, Player};
use anyhow::Result;
use minimax_tictactoe::{Outcome, Player as Mark};
use std::io::{BufRead, Write};
use tracing::instrument;

/// Plays one game, human against engine.
///
/// Prompts go to `prompts`; the board and results go to `out`.
#[instrument(skip_all, fields(first = %config.first_player()))]
pub fn run_console<R, P, W>(
    config: &GameConfig,
    input: R,
    prompts: P,
    mut out: W,
) -> Result<Outcome>
where
    R: BufRead + 'static,
    P: Write + 'static,
    W: Write,
{
    let engine_mark = *config.engine_mark();
    let human: Box<dyn Player> = Box::new(ConsoleHuman::new(
        config.human_name().clone(),
        input,
        prompts,
    ));
    let engine: Box<dyn Player> = Box::new(MinimaxPlayer::new(
        config.engine_name().clone(),
        engine_mark,
    ));
    let (player_x, player_o) = match engine_mark {
        Mark::X => (engine, human),
        Mark::O => (human, engine),
    };

    let mut orchestrator = Orchestrator::new(player_x, player_o, config.first_mark());
    writeln!(out, "{}\n", orchestrator.game().board())?;

    let engine_name = config.engine_name();
    orchestrator.run(|event, game| {
        match event {
            GameEvent::MoveMade { mark, position, .. } => {
                if *mark == engine_mark {
                    writeln!(out, "{} plays {}", engine_name, position.to_index())?;
                }
                writeln!(out, "{}\n", game.board())?;
            }
            GameEvent::GameOver { outcome, .. } => {
                match outcome {
                    Outcome::Won(mark) if *mark == engine_mark => {
                        writeln!(out, "{} wins!", engine_name)?
                    }
                    Outcome::Won(_) => writeln!(out, "You win!")?,
                    _ => writeln!(out, "It's a draw!")?,
                }
                writeln!(out, "Game over! Thanks for playing.")?;
            }
        }
        Ok(())
    })
}
