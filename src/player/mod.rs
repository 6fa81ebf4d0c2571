//! Terminal frame player module
//!
//! Plays a finished sequence of serialized frames to a writer at an exact
//! frame rate.
//!
//! # Architecture
//!
//! - `state`: PlaybackState and the PlaybackResult returned to callers
//! - `native`: The pacing loop itself
//! - `playback/`: Frame rate arithmetic, clock abstraction and cancellation
//!
//! # Usage
//!
//! ```no_run
//! use asciipv::player::{presented_message, CancelToken, FrameRate, PlaybackResult, Player};
//!
//! let frames = vec!["first".to_string(), "second".to_string()];
//! let cancel = CancelToken::install_ctrlc().unwrap();
//! let player = Player::new(FrameRate::new(17, 3)).with_cancel(cancel);
//!
//! match player.play(&frames, &mut std::io::stdout().lock()).unwrap() {
//!     PlaybackResult::Completed(_) => {}
//!     PlaybackResult::Interrupted(n) => eprintln!("{}", presented_message(n)),
//! }
//! ```

mod native;
pub mod playback;
pub mod state;

pub use native::{Player, CURSOR_HOME, DEFAULT_TICK};
pub use playback::{CancelToken, Clock, FrameRate, MonotonicClock};
pub use state::{presented_message, PlaybackResult, PlaybackState};
