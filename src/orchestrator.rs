//! Turn loop between two players.

use crate::players::Player;
use anyhow::{Context, Result};
use minimax_tictactoe::{Game, Outcome, Player as Mark, Position};
use tracing::{debug, info, instrument};

/// Notifications emitted while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied to the board.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// Mark written.
        mark: Mark,
        /// Square played.
        position: Position,
    },
    /// The game reached a terminal outcome.
    GameOver {
        /// Winner's display name, `None` for a draw.
        winner: Option<String>,
        /// Final outcome.
        outcome: Outcome,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator; `first` opens the game.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, first: Mark) -> Self {
        Self {
            game: Game::new(first),
            player_x,
            player_o,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Plays until the game is decided, reporting each step to `on_event`.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run<F>(&mut self, mut on_event: F) -> Result<Outcome>
    where
        F: FnMut(&GameEvent, &Game) -> Result<()>,
    {
        info!(first = %self.game.first_player(), "Starting game orchestration");

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let position = player.get_move(&self.game)?;
            let name = player.name().to_string();

            self.game
                .place_at(position)
                .with_context(|| format!("{} made an illegal move", name))?;

            on_event(
                &GameEvent::MoveMade {
                    player: name,
                    mark,
                    position,
                },
                &self.game,
            )?;
        }

        let outcome = self.game.outcome();
        let winner = outcome.winner().map(|mark| self.name_of(mark).to_string());
        info!(%outcome, winner = winner.as_deref().unwrap_or("none"), "Game over");
        on_event(&GameEvent::GameOver { winner, outcome }, &self.game)?;

        Ok(outcome)
    }

    /// Starts a fresh game with the same opener.
    pub fn restart(&mut self) {
        self.game = Game::new(self.game.first_player());
    }
}
