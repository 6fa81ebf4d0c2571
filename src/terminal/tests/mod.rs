//! Frame buffer tests.
//!
//! Organized by operation:
//! - fill_tests: fill_text / fill_style cursor semantics and bounds handling
//! - clone_tests: deep-copy independence
//! - serialize_tests: escape-code emission


use super::{Color, Frame};

/// Characters of row `y` as a string.
pub(crate) fn row_text(frame: &Frame, y: usize) -> String {
    (0..frame.width())
        .map(|x| frame.cell(x, y).map(|c| c.char).unwrap_or('?'))
        .collect()
}

/// Foreground colors of row `y`.
pub(crate) fn row_fg(frame: &Frame, y: usize) -> Vec<Color> {
    (0..frame.width())
        .filter_map(|x| frame.cell(x, y).map(|c| c.fg))
        .collect()
}
