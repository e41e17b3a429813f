//! The game engine: owned state aggregate and its commands.
//!
//! All mutation flows through `play`, `apply_bot_move`, `reset` and
//! `set_mode`. Illegal attempts are silent no-ops: the state is left
//! untouched and nothing is signalled to the caller.

use crate::action::{BlockedCell, Move};
use crate::position::Position;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameMode, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of active moves at which the oldest one becomes blocked.
///
/// With this threshold the board settles into a rolling window of six
/// marks (one of them blocked) and three empty squares, so a playable
/// square always exists and a draw is structurally impossible.
pub(crate) const BLOCK_THRESHOLD: usize = 6;

/// Complete game state.
///
/// Single-writer aggregate: rendering layers hold only a
/// [`GameSnapshot`] and never mutate fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    blocked: Option<BlockedCell>,
    to_move: Player,
    winner: Option<Player>,
    winning_line: Option<[Position; 3]>,
    mode: GameMode,
    // Session-monotonic move counter; never reused after eviction.
    next_sequence: u32,
}

impl Game {
    /// Creates a new game in the given mode. X moves first.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            blocked: None,
            to_move: Player::X,
            winner: None,
            winning_line: None,
            mode,
            next_sequence: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Attempts a move at the given position on behalf of the player
    /// whose turn it is.
    ///
    /// This is the human-facing entry point: in [`GameMode::VsBot`] it
    /// additionally rejects input while it is the bot's turn. Rejected
    /// attempts (occupied, blocked, out of turn, game over) leave the
    /// state untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) {
        if self.mode == GameMode::VsBot && self.to_move == Player::O {
            debug!("rejected: bot's turn");
            return;
        }
        if !self.is_open(pos) {
            debug!("rejected: square unavailable or game over");
            return;
        }
        self.commit(pos);
    }

    /// Applies the bot's move.
    ///
    /// Same pipeline as [`Game::play`] without the turn guard; the
    /// scheduler feeds it the heuristic's choice. Still a no-op on an
    /// occupied or blocked square, or after a win.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_bot_move(&mut self, pos: Position) {
        if !self.is_open(pos) {
            debug!("rejected: square unavailable or game over");
            return;
        }
        self.commit(pos);
    }

    /// Reinitializes the game. X starts; `mode` replaces the current
    /// mode when given, otherwise the mode is preserved.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Option<GameMode>) {
        *self = Game::new(mode.unwrap_or(self.mode));
    }

    /// Changes the mode without touching the board.
    ///
    /// Callers conventionally follow up with [`Game::reset`]; switching
    /// opponents mid-game is not meaningful.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// Applies a legal move: evict, commit, re-block, win check, in
    /// exactly that order. The caller has already validated the square.
    fn commit(&mut self, pos: Position) {
        // Step 1: evict the previously blocked cell, if any.
        if let Some(blocked) = self.blocked.take() {
            debug!(evicted = %blocked.position, "evicting blocked cell");
            self.board.set(blocked.position, Square::Empty);
            self.history.retain(|m| m.position != blocked.position);
        }

        // Step 2: commit the new move.
        self.next_sequence += 1;
        let mov = Move {
            player: self.to_move,
            position: pos,
            sequence: self.next_sequence,
        };
        self.history.push(mov);
        self.board.set(pos, Square::Occupied(self.to_move));
        debug!(%mov, "committed");

        // Steps 3-4: after eviction, every history entry is active, so
        // the active count is just the history length. At the threshold,
        // block the oldest move; its mark stays until the next commit.
        if self.history.len() >= BLOCK_THRESHOLD {
            let oldest = self.history[0];
            debug!(blocking = %oldest, "blocking oldest active move");
            self.blocked = Some(oldest.into());
        }

        // Step 5: win check. A win clears any pending block.
        if let Some((winner, line)) = rules::check_winner(&self.board) {
            debug!(%winner, "game won");
            self.winner = Some(winner);
            self.winning_line = Some(line);
            self.blocked = None;
        } else {
            // Step 6: no winner, pass the turn.
            self.to_move = self.to_move.opponent();
        }

        #[cfg(debug_assertions)]
        if let Err(violations) = crate::invariants::check(self) {
            panic!("invariant violated after commit: {violations:?}");
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the cell currently slated for eviction, if any.
    pub fn blocked(&self) -> Option<BlockedCell> {
        self.blocked
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the completed line, if the game is over.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True while the bot owes a move: bot mode, O to move, no winner.
    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::VsBot && self.to_move == Player::O && self.winner.is_none()
    }

    /// Playable positions: empty squares that are not blocked.
    pub fn available(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_open_square(*pos))
            .collect()
    }

    /// Read-only state snapshot for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            blocked: self.blocked,
            to_move: self.to_move,
            winner: self.winner,
            winning_line: self.winning_line,
            mode: self.mode,
            active_moves: self.history.len(),
            available_cells: self.available().len(),
            blocked_cells: usize::from(self.blocked.is_some()),
            next_to_block: self.next_to_block(),
        }
    }

    /// The move that will be blocked next, shown as a warning once five
    /// or more unblocked moves are active.
    fn next_to_block(&self) -> Option<BlockedCell> {
        let mut unblocked = self.history.iter().filter(|m| {
            self.blocked
                .is_none_or(|b| b.position != m.position)
        });
        if unblocked.clone().count() >= BLOCK_THRESHOLD - 1 {
            unblocked.next().copied().map(Into::into)
        } else {
            None
        }
    }

    fn is_open_square(&self, pos: Position) -> bool {
        self.board.is_empty(pos)
            && self.blocked.is_none_or(|b| b.position != pos)
    }

    fn is_open(&self, pos: Position) -> bool {
        self.winner.is_none() && self.is_open_square(pos)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut Game, indices: &[usize]) {
        for &i in indices {
            game.play(Position::from_index(i).unwrap());
        }
    }

    #[test]
    fn test_first_move_is_x() {
        let mut game = Game::new(GameMode::VsHuman);
        game.play(Position::Center);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].sequence, 1);
    }

    #[test]
    fn test_sixth_move_blocks_the_oldest() {
        let mut game = Game::new(GameMode::VsHuman);
        // X: 0, 3, 7 / O: 1, 2, 5 - no line completed.
        play_all(&mut game, &[0, 1, 3, 2, 7, 5]);
        assert_eq!(game.winner(), None);
        let blocked = game.blocked().expect("oldest move blocked");
        assert_eq!(blocked.position, Position::TopLeft);
        assert_eq!(blocked.player, Player::X);
        // Mark still on the board until the next commit.
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_seventh_move_evicts_and_reblocks() {
        let mut game = Game::new(GameMode::VsHuman);
        play_all(&mut game, &[0, 1, 3, 2, 7, 5, 4]);
        // X@0 (sequence 1) evicted; O@1 (sequence 2) now blocked.
        assert_eq!(game.board().get(Position::TopLeft), Square::Empty);
        assert_eq!(game.history().len(), 6);
        assert!(game.history().iter().all(|m| m.sequence != 1));
        let blocked = game.blocked().expect("re-blocked");
        assert_eq!(blocked.position, Position::TopCenter);
        assert_eq!(blocked.player, Player::O);
    }

    #[test]
    fn test_sequences_stay_unique_after_eviction() {
        let mut game = Game::new(GameMode::VsHuman);
        play_all(&mut game, &[0, 1, 3, 2, 7, 5, 4, 0]);
        // Cell 0 was evicted and replayed; its new move has a fresh number.
        let mut sequences: Vec<u32> = game.history().iter().map(|m| m.sequence).collect();
        let len = sequences.len();
        sequences.dedup();
        assert_eq!(sequences.len(), len);
        assert_eq!(*sequences.last().unwrap(), 8);
    }

    #[test]
    fn test_blocked_square_rejected() {
        let mut game = Game::new(GameMode::VsHuman);
        play_all(&mut game, &[0, 1, 3, 2, 7, 5]);
        let before = game.clone();
        game.play(Position::TopLeft); // blocked
        assert_eq!(game, before);
    }

    #[test]
    fn test_human_cannot_move_on_bot_turn() {
        let mut game = Game::new(GameMode::VsBot);
        game.play(Position::Center);
        assert!(game.is_bot_turn());
        let before = game.clone();
        game.play(Position::TopLeft);
        assert_eq!(game, before);
        // The bot path goes through.
        game.apply_bot_move(Position::TopLeft);
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_reset_preserves_mode_by_default() {
        let mut game = Game::new(GameMode::VsHuman);
        play_all(&mut game, &[0, 1, 3]);
        game.reset(None);
        assert_eq!(game, Game::new(GameMode::VsHuman));
        game.reset(Some(GameMode::VsBot));
        assert_eq!(game.mode(), GameMode::VsBot);
    }
}
