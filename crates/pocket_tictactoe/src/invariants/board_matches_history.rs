//! Board marks are exactly the active subset of history.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::Square;

/// Every occupied square corresponds to exactly one history entry with
/// the same mark, and every history entry is still marked on the board.
///
/// Evicted moves are removed from history at the same moment their mark
/// is cleared, so the two views can never drift apart.
pub struct BoardMatchesHistory;

impl Invariant<Game> for BoardMatchesHistory {
    fn holds(game: &Game) -> bool {
        // Each history entry must be marked on the board by its player.
        for mov in game.history() {
            if game.board().get(mov.position) != Square::Occupied(mov.player) {
                return false;
            }
        }

        // No occupied square without a history entry, and no duplicate
        // history entries for one square.
        for pos in Position::ALL {
            let entries = game
                .history()
                .iter()
                .filter(|m| m.position == pos)
                .count();
            let expected = match game.board().get(pos) {
                Square::Empty => 0,
                Square::Occupied(_) => 1,
            };
            if entries != expected {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "board marks are exactly the active subset of move history"
    }
}
