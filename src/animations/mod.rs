//! Animations and the interface they implement.
//!
//! An animation describes its fixed screen size and tempo and renders all of
//! its frames into an [`AuthoringSession`] up front; playback only ever sees
//! the finished [`FrameSequence`].

mod showcase;

pub use showcase::Showcase;

use crate::authoring::{AuthoringSession, BeatStamp, FrameSequence};
use crate::player::FrameRate;
use crate::terminal::Frame;

/// A self-contained, pre-choreographed terminal animation.
pub trait Animation {
    /// Song title, shown in the program name and version banner.
    fn title(&self) -> &str;

    /// Who made the animation, shown in the version banner.
    fn credits(&self) -> String;

    /// Screen size as (width, height).
    fn size(&self) -> (usize, usize);

    /// The tempo-derived frame rate the animation was authored for.
    fn frame_rate(&self) -> FrameRate;

    /// Where the "bar.beat" label goes.
    fn beat_stamp(&self) -> BeatStamp;

    /// Render every frame into `session`.
    fn compose(&self, session: &mut AuthoringSession);

    /// A blank frame of the animation's size.
    fn blank_frame(&self) -> Frame {
        let (width, height) = self.size();
        Frame::new(width, height)
    }

    /// Text printed by `--version`.
    fn banner(&self) -> String {
        format!("PV of {}\nProgram: {}", self.title(), self.credits())
    }
}

/// Build the complete frame sequence of `animation`.
pub fn compose(animation: &dyn Animation) -> FrameSequence {
    let mut session = AuthoringSession::new(animation.beat_stamp());
    animation.compose(&mut session);
    let frames = session.finish();
    tracing::debug!(
        title = animation.title(),
        frames = frames.len(),
        rate = %animation.frame_rate(),
        "animation composed"
    );
    frames
}
