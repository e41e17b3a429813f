//! First-class invariants for the sliding-window game.
//!
//! Invariants are logical properties that must hold after every state
//! transition. They are testable independently and serve as documentation
//! of engine guarantees; `Game` checks them after each commit in debug
//! builds.

mod board_matches_history;
mod single_block;
mod terminal_winner;

pub use board_matches_history::BoardMatchesHistory;
pub use single_block::SingleBlock;
pub use terminal_winner::TerminalWinner;

use crate::game::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Checks all engine invariants against a game state.
///
/// Returns `Ok(())` when every invariant holds, or the list of
/// violations otherwise.
pub fn check(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !BoardMatchesHistory::holds(game) {
        violations.push(InvariantViolation::new(BoardMatchesHistory::description()));
    }
    if !SingleBlock::holds(game) {
        violations.push(InvariantViolation::new(SingleBlock::description()));
    }
    if !TerminalWinner::holds(game) {
        violations.push(InvariantViolation::new(TerminalWinner::description()));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Position};

    #[test]
    fn test_fresh_game_satisfies_all_invariants() {
        assert_eq!(check(&Game::default()), Ok(()));
    }

    #[test]
    fn test_long_game_satisfies_all_invariants() {
        let mut game = Game::new(GameMode::VsHuman);
        for i in [0usize, 1, 3, 2, 7, 5, 4, 0, 8] {
            game.play(Position::from_index(i).unwrap());
            assert_eq!(check(&game), Ok(()));
        }
    }
}
