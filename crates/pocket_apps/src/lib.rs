//! State models for the pocketdeck demo apps.
//!
//! Each app is a small owned aggregate mutated through command methods,
//! with read-only accessors for rendering. No app talks to the outside
//! world: the weather is mock data and the music player only pretends
//! to play audio.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod calculator;
pub mod music;
pub mod todo;
pub mod weather;

pub use calculator::Calculator;
pub use music::MusicPlayer;
pub use todo::TodoList;
pub use weather::WeatherReport;
