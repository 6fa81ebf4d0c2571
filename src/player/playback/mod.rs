//! Playback timing primitives for the player.
//!
//! This module handles frame rate arithmetic, the time source and
//! cancellation.

mod cancel;
mod clock;
mod rate;

pub use cancel::CancelToken;
pub use clock::{Clock, MonotonicClock};
pub use rate::FrameRate;
