//! Time source for frame pacing.

use std::time::{Duration, Instant};

/// Monotonic time source used by the player.
///
/// Abstracted so pacing can be verified without waiting on the wall clock.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed epoch. Never decreases.
    fn now(&self) -> Duration;

    /// Block for roughly `dur`.
    fn sleep(&self, dur: Duration);
}

/// The real monotonic clock, backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&self, dur: Duration) {
        std::thread::sleep(dur);
    }
}
