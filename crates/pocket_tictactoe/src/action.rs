//! Move records and the blocked-cell marker.
//!
//! Moves are domain events, not side effects: each committed move carries a
//! sequence number that is monotonic for the lifetime of one game session
//! and never reused, even after the move itself has been evicted from the
//! board. The sliding-window rule keys eviction order off this number.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A committed move: a player's mark at a position, stamped with a
/// session-monotonic sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
    /// Monotonic move number, starting at 1. Unique within a session.
    pub sequence: u32,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.sequence, self.player, self.position.label())
    }
}

/// A cell slated for eviction.
///
/// The mark is still on the board (rendered faded), but the square cannot
/// be played, and it is cleared the moment the next move commits. At most
/// one cell is blocked at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedCell {
    /// The blocked position.
    pub position: Position,
    /// Whose mark sits there until eviction.
    pub player: Player,
}

impl From<Move> for BlockedCell {
    fn from(mov: Move) -> Self {
        Self {
            position: mov.position,
            player: mov.player,
        }
    }
}
