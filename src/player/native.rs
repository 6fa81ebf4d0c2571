//! Frame-paced terminal player.
//!
//! Frames are written as soon as they are reached; the player then waits in
//! short sleep increments until the next frame's deadline. Every deadline is
//! measured from the same start reading, so slow frames never push later
//! frames back.

use std::io::Write;
use std::time::Duration;

use crate::error::PvError;
use crate::player::playback::{CancelToken, Clock, FrameRate, MonotonicClock};
use crate::player::state::{PlaybackResult, PlaybackState};

/// Escape sequence moving the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Default sleep increment between deadline checks.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1);

/// Plays a sequence of pre-rendered frames at a fixed rate.
#[derive(Debug, Clone)]
pub struct Player<C = MonotonicClock> {
    rate: FrameRate,
    tick: Duration,
    clock: C,
    cancel: CancelToken,
}

impl Player<MonotonicClock> {
    /// Create a player using the real monotonic clock.
    pub fn new(rate: FrameRate) -> Self {
        Self {
            rate,
            tick: DEFAULT_TICK,
            clock: MonotonicClock::new(),
            cancel: CancelToken::new(),
        }
    }
}

impl<C: Clock> Player<C> {
    /// Replace the time source.
    pub fn with_clock<D: Clock>(self, clock: D) -> Player<D> {
        Player {
            rate: self.rate,
            tick: self.tick,
            clock,
            cancel: self.cancel,
        }
    }

    /// Set the sleep increment. A zero tick is raised to one nanosecond.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_nanos(1));
        self
    }

    /// Use `cancel` to stop playback early.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[inline]
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    #[inline]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Write every frame to `out`, pacing them at the player's rate.
    ///
    /// Each frame is preceded by [`CURSOR_HOME`] and followed by a flush.
    ///
    /// # Returns
    /// `Completed` with the frame count, or `Interrupted` with the number of
    /// frames written before the cancel token fired
    pub fn play<W, S>(&self, frames: &[S], out: &mut W) -> Result<PlaybackResult, PvError>
    where
        W: Write,
        S: AsRef<str>,
    {
        let mut state = PlaybackState::new(self.clock.now());
        tracing::debug!(frames = frames.len(), rate = %self.rate, "playback started");

        for (i, body) in frames.iter().enumerate() {
            if self.cancel.is_cancelled() {
                tracing::info!(presented = state.presented, "playback interrupted");
                return Ok(PlaybackResult::Interrupted(state.presented));
            }
            out.write_all(CURSOR_HOME.as_bytes())?;
            out.write_all(body.as_ref().as_bytes())?;
            out.flush()?;
            state.presented = i + 1;

            if !self.wait_for_deadline(&state, state.presented as u64) {
                tracing::info!(presented = state.presented, "playback interrupted");
                return Ok(PlaybackResult::Interrupted(state.presented));
            }
        }

        tracing::info!(presented = state.presented, "playback finished");
        Ok(PlaybackResult::Completed(state.presented))
    }

    /// Sleep until the deadline of frame `index` has passed.
    ///
    /// Returns `false` if cancelled while waiting.
    fn wait_for_deadline(&self, state: &PlaybackState, index: u64) -> bool {
        let deadline = self.rate.offset(index);
        loop {
            if self.cancel.is_cancelled() {
                return false;
            }
            let elapsed = state.elapsed(self.clock.now());
            if self.rate.is_due(elapsed, index) {
                return true;
            }
            let remaining = deadline.saturating_sub(elapsed);
            self.clock.sleep(remaining.min(self.tick));
        }
    }
}
