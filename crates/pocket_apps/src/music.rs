//! Music player: playback state over a fixed playlist.
//!
//! No audio is produced; "playback" is an elapsed-seconds counter the
//! UI advances with wall-clock deltas. Tracks auto-advance at the end.

use serde::Serialize;
use tracing::debug;

/// Seconds of progress after which "previous" restarts the track
/// instead of jumping back a track.
const RESTART_THRESHOLD_SECS: f64 = 3.0;

/// A playlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Track title.
    pub title: &'static str,
    /// Artist name.
    pub artist: &'static str,
    /// Album name.
    pub album: &'static str,
    /// Track length in seconds.
    pub duration_secs: u32,
}

/// Player state over the demo playlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicPlayer {
    playlist: Vec<Track>,
    current: usize,
    playing: bool,
    elapsed_secs: f64,
    volume: f64,
    liked: bool,
}

impl MusicPlayer {
    /// Creates a paused player at the top of the demo playlist.
    pub fn new() -> Self {
        Self {
            playlist: demo_playlist(),
            current: 0,
            playing: false,
            elapsed_secs: 0.0,
            volume: 0.7,
            liked: false,
        }
    }

    /// The current track.
    pub fn track(&self) -> &Track {
        &self.playlist[self.current]
    }

    /// The whole playlist.
    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    /// Index of the current track.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Seconds into the current track.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Playback progress in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        (self.elapsed_secs / f64::from(self.track().duration_secs)).clamp(0.0, 1.0)
    }

    /// Volume in `0.0..=1.0`.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Whether the heart is lit.
    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Starts or pauses playback.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        debug!(playing = self.playing, track = self.track().title, "toggled");
    }

    /// Skips to the next track (wrapping), keeping the play state.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.playlist.len();
        self.elapsed_secs = 0.0;
    }

    /// Restarts the current track, or jumps to the previous one
    /// (wrapping) when fewer than three seconds have played.
    pub fn previous(&mut self) {
        if self.elapsed_secs < RESTART_THRESHOLD_SECS {
            self.current = (self.current + self.playlist.len() - 1) % self.playlist.len();
        }
        self.elapsed_secs = 0.0;
    }

    /// Toggles the heart.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Nudges the volume by `delta`, clamped to `0.0..=1.0`.
    pub fn adjust_volume(&mut self, delta: f64) {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
    }

    /// Advances playback by a wall-clock delta. At the end of a track
    /// the player moves on to the next one and keeps playing.
    pub fn tick(&mut self, dt_secs: f64) {
        if !self.playing {
            return;
        }
        self.elapsed_secs += dt_secs;
        if self.elapsed_secs >= f64::from(self.track().duration_secs) {
            debug!(track = self.track().title, "track ended, advancing");
            self.next();
        }
    }
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_playlist() -> Vec<Track> {
    vec![
        Track {
            title: "Chill Vibes",
            artist: "Lofi Hip Hop",
            album: "Study Beats",
            duration_secs: 180,
        },
        Track {
            title: "Ocean Waves",
            artist: "Nature Sounds",
            album: "Relaxation",
            duration_secs: 240,
        },
        Track {
            title: "Jazz Cafe",
            artist: "Smooth Jazz",
            album: "Evening Moods",
            duration_secs: 200,
        },
        Track {
            title: "Electronic Dreams",
            artist: "Synthwave",
            album: "Neon Nights",
            duration_secs: 220,
        },
    ]
}
