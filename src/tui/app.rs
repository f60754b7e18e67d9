//! Application state and logic.

use crate::config::GameConfig;
use crate::players::{MinimaxPlayer, Player};
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use minimax_tictactoe::{Game, MoveError, Outcome, Player as Mark, Position};
use tracing::{debug, info};

use super::input::{digit_position, move_cursor};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    engine: MinimaxPlayer,
    human_name: String,
    first: Mark,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application from configuration.
    pub fn new(config: &GameConfig) -> Self {
        let first = config.first_mark();
        let mut app = Self {
            game: Game::new(first),
            engine: MinimaxPlayer::new(config.engine_name().clone(), *config.engine_mark()),
            human_name: config.human_name().clone(),
            first,
            cursor: Position::Center,
            status_message: String::new(),
        };
        app.status_message = app.turn_message();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True when the engine should move next.
    pub fn is_engine_turn(&self) -> bool {
        !self.game.is_over() && self.game.to_move() == self.engine.mark()
    }

    /// Handles a key press from the human.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.human_move(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.human_move(position);
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn human_move(&mut self, position: Position) {
        if self.is_engine_turn() {
            return;
        }

        match self.game.place_at(position) {
            Ok(outcome) => {
                debug!(position = ?position, "Human move applied");
                self.status_message = self.after_move(&self.human_name, position, outcome);
            }
            Err(MoveError::GameOver(_)) => {}
            Err(e) => {
                self.status_message = format!("{}. Try again.", e);
            }
        }
    }

    /// Lets the engine play its move.
    pub fn engine_turn(&mut self) -> Result<()> {
        let position = self
            .game
            .best_move(self.engine.engine())
            .with_context(|| format!("{} could not choose a move", self.engine.name()))?;
        let outcome = self
            .game
            .place_at(position)
            .context("Engine chose an illegal square")?;
        self.cursor = position;
        self.status_message = self.after_move(self.engine.name(), position, outcome);
        Ok(())
    }

    fn after_move(&self, name: &str, position: Position, outcome: Outcome) -> String {
        match outcome {
            Outcome::InProgress => format!("{} played {}. {}", name, position, self.turn_message()),
            Outcome::Won(mark) => {
                let winner = if mark == self.engine.mark() {
                    self.engine.name()
                } else {
                    self.human_name.as_str()
                };
                format!("{} wins! Press 'r' to restart or 'q' to quit.", winner)
            }
            Outcome::Draw => {
                "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string()
            }
        }
    }

    fn turn_message(&self) -> String {
        if self.is_engine_turn() {
            format!("{} is thinking...", self.engine.name())
        } else {
            format!("Your move ({})", self.game.to_move())
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new(self.first);
        self.cursor = Position::Center;
        self.status_message = self.turn_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FirstPlayer;

    #[test]
    fn test_human_move_then_engine_reply() {
        let mut app = App::new(&GameConfig::default());
        assert!(!app.is_engine_turn());

        assert_eq!(app.handle_key(KeyCode::Char('1')), AppAction::Continue);
        assert_eq!(app.game().history().len(), 1);
        assert!(app.is_engine_turn());

        app.engine_turn().unwrap();
        assert_eq!(app.cursor(), Position::Center);
        assert!(!app.is_engine_turn());
    }

    #[test]
    fn test_occupied_square_sets_status() {
        let mut app = App::new(&GameConfig::default());
        app.handle_key(KeyCode::Enter);
        app.engine_turn().unwrap();

        let before = app.game().history().len();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), before);
        assert!(app.status_message().contains("occupied"));
    }

    #[test]
    fn test_keys_ignored_on_engine_turn() {
        let config = GameConfig::default().with_first_player(FirstPlayer::Engine);
        let mut app = App::new(&config);
        assert!(app.is_engine_turn());
        app.handle_key(KeyCode::Char('5'));
        assert!(app.game().history().is_empty());
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(&GameConfig::default());
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.game().history().is_empty());
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    }
}
