//! No-draw tic-tac-toe engine.
//!
//! A tic-tac-toe variant that cannot end in a draw: once six moves are
//! active on the board, the oldest one is marked as *blocked* (still
//! visible, no longer protectable) and is evicted when the next move
//! commits. The board therefore settles into a rolling window of six
//! marks (one of them blocked) and three empty squares, so a playable
//! square always exists and play continues until somebody completes a
//! line.
//!
//! # Architecture
//!
//! - **Game**: the single owned state aggregate, mutated only through
//!   `play`, `apply_bot_move`, `reset` and `set_mode`
//! - **Rules**: stateless win detection over the eight fixed lines
//! - **Bot**: a pure heuristic move chooser (win, block, center, corner)
//! - **Snapshot**: a read-only view for rendering layers
//! - **Invariants**: named, independently testable state properties
//!
//! Illegal move attempts are silent no-ops rather than errors: the caller
//! (a UI) already filters most of them, and the remainder are expected
//! inputs, not failures.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod bot;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{BlockedCell, Move};
pub use game::Game;
pub use position::Position;
pub use snapshot::GameSnapshot;
pub use types::{Board, GameMode, Player, Square};
