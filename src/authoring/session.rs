//! Authoring session: the frame sequence under construction plus the beat
//! counter stamped into each frame.

use std::fmt;

use crate::authoring::sequence::FrameSequence;
use crate::authoring::step::Step;
use crate::terminal::{Color, Frame};

/// Where and in which color the "bar.beat" label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeatStamp {
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

impl BeatStamp {
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Callback that appends a frame itself, e.g. repainting it first.
pub type AppendFn<'a> = &'a dyn Fn(&mut AuthoringSession, &mut Frame);

/// How an effect appends the frames it produces.
#[derive(Clone, Copy, Default)]
pub enum Append<'a> {
    /// Serialize the frame as is
    Plain,
    /// Stamp the beat label first and advance the beat counter
    #[default]
    Beat,
    /// Hand the frame to a callback, which is responsible for pushing it
    Custom(AppendFn<'a>),
}

impl fmt::Debug for Append<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Append::Plain => f.write_str("Plain"),
            Append::Beat => f.write_str("Beat"),
            Append::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Collects serialized frames while tracking the musical position.
///
/// The beat advances once every two beat-stamped frames, so at two frames
/// per beat each label is shown twice.
#[derive(Debug, Clone)]
pub struct AuthoringSession {
    frames: FrameSequence,
    stamp: BeatStamp,
    beat: u32,
    beat_next: bool,
}

impl AuthoringSession {
    /// Start a session at beat 1 with an empty sequence.
    pub fn new(stamp: BeatStamp) -> Self {
        Self {
            frames: FrameSequence::new(),
            stamp,
            beat: 1,
            beat_next: false,
        }
    }

    /// Current beat number, starting at 1.
    #[inline]
    pub fn beat(&self) -> u32 {
        self.beat
    }

    /// Whether the next beat-stamped frame is the second one of its beat,
    /// i.e. the one after which the beat advances.
    #[inline]
    pub fn beat_next(&self) -> bool {
        self.beat_next
    }

    #[inline]
    pub fn stamp(&self) -> BeatStamp {
        self.stamp
    }

    /// Frames collected so far.
    #[inline]
    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    /// The current position as a right-aligned `"bar.beat"` label in four
    /// beats to the bar, e.g. `"  2.3"`.
    pub fn beat_label(&self) -> String {
        let zero_based = self.beat.saturating_sub(1);
        format!("{:>5}", format!("{}.{}", zero_based / 4 + 1, zero_based % 4 + 1))
    }

    /// Append `frame` without a beat label.
    pub fn push(&mut self, frame: &Frame) {
        self.frames.push(frame.to_ansi_string());
    }

    /// Stamp the beat label into `frame`, append it and advance the counter.
    pub fn push_beat(&mut self, frame: &mut Frame) {
        let label = self.beat_label();
        frame.fill_text(&label, self.stamp.x, self.stamp.y, Some(self.stamp.color), None);
        self.frames.push(frame.to_ansi_string());
        if self.beat_next {
            self.beat += 1;
        }
        self.beat_next = !self.beat_next;
    }

    /// Append `frame` the way `mode` asks for.
    pub fn push_with(&mut self, frame: &mut Frame, mode: Append<'_>) {
        match mode {
            Append::Plain => self.push(frame),
            Append::Beat => self.push_beat(frame),
            Append::Custom(append) => append(self, frame),
        }
    }

    /// Push `count` beat-stamped copies of `frame` as it currently is.
    pub fn hold(&mut self, frame: &mut Frame, count: usize) {
        for _ in 0..count {
            self.push_beat(frame);
        }
    }

    /// Play a choreography table: for every group, apply its steps in order
    /// and push one beat-stamped frame. An empty group holds the frame for
    /// one more step.
    pub fn perform<'s, G>(&mut self, frame: &mut Frame, groups: &[G])
    where
        G: AsRef<[Step<'s>]>,
    {
        for group in groups {
            for step in group.as_ref() {
                step.apply(frame);
            }
            self.push_beat(frame);
        }
    }

    /// Finish authoring and hand over the sequence.
    pub fn finish(self) -> FrameSequence {
        tracing::debug!(frames = self.frames.len(), beat = self.beat, "authoring finished");
        self.frames
    }
}
