//! Game rules.
//!
//! Only win detection lives here. There is deliberately no draw rule:
//! the sliding-window eviction in [`crate::Game`] guarantees a playable
//! square always exists.

mod win;

pub use win::{check_winner, LINES};
