//! Animation authoring toolkit.
//!
//! Animations are written as a sequence of edits to a [`Frame`](crate::terminal::Frame),
//! with each intermediate state serialized into an [`AuthoringSession`]:
//! - `session`: beat counter, beat stamp and frame appending
//! - `sequence`: the finished list of serialized frames
//! - `step`: choreography steps (literal fills or custom edits)
//! - `effects`: multi-frame effects (line sweeps, text reveals)

pub mod effects;
mod sequence;
mod session;
mod step;

pub use effects::{animating_line, LineSpec, TextReveal};
pub use sequence::FrameSequence;
pub use session::{Append, AppendFn, AuthoringSession, BeatStamp};
pub use step::{FillOp, Step};
