//! A won game is terminal and internally consistent.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// When a winner is set, the winning line holds three of the winner's
/// marks and no block is pending (a win clears any pending block).
/// Conversely, no winner means no winning line.
pub struct TerminalWinner;

impl Invariant<Game> for TerminalWinner {
    fn holds(game: &Game) -> bool {
        match (game.winner(), game.winning_line()) {
            (None, None) => true,
            (Some(winner), Some(line)) => {
                game.blocked().is_none()
                    && line
                        .iter()
                        .all(|pos| game.board().get(*pos) == Square::Occupied(winner))
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "winner and winning line are set together, with no pending block"
    }
}
