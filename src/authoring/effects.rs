//! Reusable multi-frame effects.
//!
//! Each effect renders several consecutive frames into an
//! [`AuthoringSession`], appending them as selected by [`Append`].

use num_rational::Ratio;

use crate::authoring::session::{Append, AuthoringSession};
use crate::terminal::{Color, Frame, Style, StyleMap};

/// A full-height and/or full-width line painted in a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    /// Column of a vertical line
    pub column: Option<usize>,
    /// Row of a horizontal line
    pub row: Option<usize>,
    /// Background color of the line
    pub color: Color,
}

impl LineSpec {
    pub fn vertical(column: usize, color: Color) -> Self {
        Self {
            column: Some(column),
            row: None,
            color,
        }
    }

    pub fn horizontal(row: usize, color: Color) -> Self {
        Self {
            column: None,
            row: Some(row),
            color,
        }
    }

    /// Both a vertical and a horizontal line, crossing at (`column`, `row`).
    pub fn cross(column: usize, row: usize, color: Color) -> Self {
        Self {
            column: Some(column),
            row: Some(row),
            color,
        }
    }

    fn paint_first_half(&self, frame: &mut Frame) {
        let styles = StyleMap::from([('W', Style::bg(self.color))]);
        if let Some(x) = self.column {
            frame.fill_style(&"W\n".repeat(frame.height() / 2), &styles, x, 0);
        }
        if let Some(y) = self.row {
            frame.fill_style(&"W".repeat(frame.width() / 2), &styles, 0, y);
        }
    }

    fn paint_second_half(&self, frame: &mut Frame) {
        let styles = StyleMap::from([('W', Style::bg(self.color))]);
        let (half_w, half_h) = (frame.width() / 2, frame.height() / 2);
        if let Some(x) = self.column {
            frame.fill_style(&"W\n".repeat(frame.height() - half_h), &styles, x, half_h);
        }
        if let Some(y) = self.row {
            frame.fill_style(&"W".repeat(frame.width() - half_w), &styles, half_w, y);
        }
    }
}

/// Sweep a line across `base` in three frames: the first half appears, the
/// line is complete, then only the second half remains.
///
/// `base` itself is left untouched; the frames are drawn on copies.
pub fn animating_line(
    session: &mut AuthoringSession,
    base: &Frame,
    line: LineSpec,
    append: Append<'_>,
) {
    let mut frame = base.clone();
    line.paint_first_half(&mut frame);
    session.push_with(&mut frame, append);
    line.paint_second_half(&mut frame);
    session.push_with(&mut frame, append);

    let mut frame = base.clone();
    line.paint_second_half(&mut frame);
    session.push_with(&mut frame, append);
}

/// Text that is revealed character by character over a number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReveal {
    pub text: String,
    /// Number of frames the reveal is spread over
    pub frames: usize,
    pub x: usize,
    pub y: usize,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    /// Draw on the caller's frame (`true`) or on a private copy of it
    pub in_place: bool,
}

impl TextReveal {
    pub fn new(text: impl Into<String>, frames: usize, x: usize, y: usize) -> Self {
        Self {
            text: text.into(),
            frames,
            x,
            y,
            fg: None,
            bg: None,
            in_place: true,
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

    /// Reveal on a copy, leaving the caller's frame as it was.
    pub fn on_copy(mut self) -> Self {
        self.in_place = false;
        self
    }

    /// Character count shown after `step` of the reveal (1-based).
    fn shown_after(&self, step: usize, len: usize) -> usize {
        round_half_even(Ratio::new(step as u64 * len as u64, self.frames as u64)) as usize + 1
    }

    /// Reveal the text in place, pushing one frame per step.
    ///
    /// After step `k` the first `round(k * len / frames) + 1` characters are
    /// visible. Unless [`on_copy`](Self::on_copy) was requested, the text
    /// stays drawn on `frame` afterwards.
    pub fn popup(
        &self,
        session: &mut AuthoringSession,
        frame: &mut Frame,
        append: Append<'_>,
    ) {
        if self.frames == 0 {
            return;
        }
        let mut copy;
        let frame = if self.in_place {
            frame
        } else {
            copy = frame.clone();
            &mut copy
        };
        let chars: Vec<char> = self.text.chars().collect();
        for step in 1..=self.frames {
            let shown: String = chars.iter().take(self.shown_after(step, chars.len())).collect();
            frame.fill_text(&shown, self.x, self.y, self.fg, self.bg);
            session.push_with(frame, append);
        }
    }

    /// Reveal the text with the upcoming characters previewed one row above,
    /// so they appear to drop into place on the next step.
    ///
    /// The preview is skipped when the text sits on row 0.
    pub fn drop_in(
        &self,
        session: &mut AuthoringSession,
        frame: &mut Frame,
        append: Append<'_>,
    ) {
        if self.frames == 0 {
            return;
        }
        let mut copy;
        let frame = if self.in_place {
            frame
        } else {
            copy = frame.clone();
            &mut copy
        };
        let chars: Vec<char> = self.text.chars().collect();
        let len = chars.len();
        for step in 1..=self.frames {
            let shown = self.shown_after(step, len);
            let next = self.shown_after(step + 1, len);

            if let Some(above) = self.y.checked_sub(1) {
                let chunk: String = chars
                    .iter()
                    .skip(shown)
                    .take(next.saturating_sub(shown))
                    .collect();
                let width = next.min(len);
                let preview = format!("{:>width$}", chunk, width = width);
                frame.fill_text(&preview, self.x, above, self.fg, self.bg);
            }

            let landed: String = chars.iter().take(shown).collect();
            frame.fill_text(&landed, self.x, self.y, self.fg, self.bg);
            session.push_with(frame, append);
        }
    }
}

/// Round to the nearest integer, ties to even.
fn round_half_even(value: Ratio<u64>) -> u64 {
    let (numer, denom) = (*value.numer(), *value.denom());
    let floor = numer / denom;
    let twice_rem = (numer % denom) * 2;
    if twice_rem > denom || (twice_rem == denom && floor % 2 == 1) {
        floor + 1
    } else {
        floor
    }
}
