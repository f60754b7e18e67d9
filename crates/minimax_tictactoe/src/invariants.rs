//! First-class invariants for a game in play.
//!
//! Checked after every validated move in debug builds and testable on
//! their own.

use super::{Game, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the side that moved first has the same number of marks as
/// the other side, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let first = game.board().count(game.first_player());
        let second = game.board().count(game.first_player().opponent());
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First mover has equal marks or one more than the second mover"
    }
}

/// Invariant: players alternate, starting with the first player.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.player != game.first_player()) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            game.first_player()
        } else {
            game.first_player().opponent()
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with the first player"
    }
}

/// Invariant: the board holds exactly the marks recorded in history.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let occupied = 9 - board.empty_count();

        occupied == game.history().len()
            && game
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "Board matches move history"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);
