//! Read-only state snapshot for rendering layers.

use crate::action::BlockedCell;
use crate::position::Position;
use crate::types::{Board, GameMode, Player};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs, captured at one point in time.
///
/// The counts are derived and informational only; the engine remains the
/// single source of truth. Renderers decide their own diffing strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Cell slated for eviction, if any.
    pub blocked: Option<BlockedCell>,
    /// Player to move.
    pub to_move: Player,
    /// Winner, once the game is over.
    pub winner: Option<Player>,
    /// The completed line, once the game is over.
    pub winning_line: Option<[Position; 3]>,
    /// Current mode.
    pub mode: GameMode,
    /// Moves currently marked on the board.
    pub active_moves: usize,
    /// Empty, unblocked squares.
    pub available_cells: usize,
    /// Blocked squares (0 or 1).
    pub blocked_cells: usize,
    /// The move that will be blocked next, once five unblocked moves
    /// are active. Warning display only.
    pub next_to_block: Option<BlockedCell>,
}

impl GameSnapshot {
    /// True once a winner is set.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the given position is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos))
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match (self.winner, self.mode) {
            (Some(Player::X), GameMode::VsBot) => "You win!".to_string(),
            (Some(Player::O), GameMode::VsBot) => "Bot wins!".to_string(),
            (Some(player), GameMode::VsHuman) => format!("Player {player} wins!"),
            (None, GameMode::VsBot) => match self.to_move {
                Player::X => "Your turn".to_string(),
                Player::O => "Bot's turn".to_string(),
            },
            (None, GameMode::VsHuman) => format!("Player {}'s turn", self.to_move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, GameMode};

    #[test]
    fn test_fresh_snapshot_counts() {
        let snap = Game::new(GameMode::VsBot).snapshot();
        assert_eq!(snap.active_moves, 0);
        assert_eq!(snap.available_cells, 9);
        assert_eq!(snap.blocked_cells, 0);
        assert_eq!(snap.next_to_block, None);
        assert_eq!(snap.status_string(), "Your turn");
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = Game::default().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
