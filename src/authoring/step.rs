//! Choreography steps.
//!
//! A step is either a plain text fill or an arbitrary edit of the frame.
//! Animation scripts list steps per beat and hand them to
//! [`AuthoringSession::perform`](super::AuthoringSession::perform).

use std::fmt;

use crate::terminal::{Color, Frame};

/// Arguments of one [`Frame::fill_text`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOp {
    pub text: String,
    pub x: usize,
    pub y: usize,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl FillOp {
    /// Fill `text` at (`x`, `y`) keeping the existing colors.
    pub fn new(text: impl Into<String>, x: usize, y: usize) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            fg: None,
            bg: None,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn apply(&self, frame: &mut Frame) {
        frame.fill_text(&self.text, self.x, self.y, self.fg, self.bg);
    }
}

/// One choreography step.
pub enum Step<'a> {
    /// A literal text fill
    Fill(FillOp),
    /// Any other edit of the frame
    Custom(Box<dyn Fn(&mut Frame) + 'a>),
}

impl<'a> Step<'a> {
    /// Shorthand for a [`Step::Fill`] without color overrides.
    pub fn text(text: impl Into<String>, x: usize, y: usize) -> Self {
        Step::Fill(FillOp::new(text, x, y))
    }

    /// Wrap a closure as a [`Step::Custom`].
    pub fn custom(action: impl Fn(&mut Frame) + 'a) -> Self {
        Step::Custom(Box::new(action))
    }

    /// Apply this step to `frame`.
    pub fn apply(&self, frame: &mut Frame) {
        match self {
            Step::Fill(op) => op.apply(frame),
            Step::Custom(action) => action(frame),
        }
    }
}

impl From<FillOp> for Step<'_> {
    fn from(op: FillOp) -> Self {
        Step::Fill(op)
    }
}

impl fmt::Debug for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Fill(op) => f.debug_tuple("Fill").field(op).finish(),
            Step::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
