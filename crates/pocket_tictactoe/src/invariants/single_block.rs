//! The blocked cell, when present, refers to a live move.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// At most one cell is blocked (structurally enforced by the `Option`),
/// and a blocked cell always names a position that is still in history
/// and still marked on the board with the blocked player's mark.
///
/// Eviction has not happened yet while a cell is merely blocked; the
/// mark disappears only when the next move commits.
pub struct SingleBlock;

impl Invariant<Game> for SingleBlock {
    fn holds(game: &Game) -> bool {
        let Some(blocked) = game.blocked() else {
            return true;
        };

        let in_history = game
            .history()
            .iter()
            .any(|m| m.position == blocked.position && m.player == blocked.player);

        in_history && game.board().get(blocked.position) == Square::Occupied(blocked.player)
    }

    fn description() -> &'static str {
        "a blocked cell is a live history move, still marked on the board"
    }
}
