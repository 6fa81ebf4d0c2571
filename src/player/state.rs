//! Player state management
//!
//! Contains the `PlaybackState` tracked while frames are emitted, and the
//! `PlaybackResult` returned to the caller.

use std::time::Duration;

/// Outcome of a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Every frame was presented
    Completed(usize),
    /// Playback was cancelled after presenting this many frames
    Interrupted(usize),
}

impl PlaybackResult {
    /// Number of frames that reached the output.
    pub fn presented(&self) -> usize {
        match self {
            Self::Completed(n) | Self::Interrupted(n) => *n,
        }
    }

    /// Whether playback was cut short.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted(_))
    }
}

/// Human readable frame count, e.g. `"1 frame presented"`.
pub fn presented_message(count: usize) -> String {
    if count == 1 {
        "1 frame presented".to_string()
    } else {
        format!("{} frames presented", count)
    }
}

/// Timing state for one playback run.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackState {
    /// Clock reading when playback started
    pub start: Duration,
    /// Frames written so far (the 1-based index of the last frame)
    pub presented: usize,
}

impl PlaybackState {
    /// Create a state anchored at clock reading `start`.
    pub fn new(start: Duration) -> Self {
        Self { start, presented: 0 }
    }

    /// Time since playback started, given the current clock reading.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.start)
    }
}
