//! Frame to ANSI string conversion.
//!
//! Color codes are only emitted when a cell's color differs from the last
//! one emitted, so a run of equally colored cells costs one code per channel.

use super::frame::Frame;
use super::palette::{push_bg, push_fg};
use super::types::Color;

/// Row separator written between (not before) rows.
pub const ROW_SEPARATOR: &str = "\r\n";

impl Frame {
    /// Serialize the whole grid into a string of characters and SGR codes.
    ///
    /// The first cell always emits both of its color codes; afterwards a code
    /// is only written when that channel changes. Foreground and background
    /// are tracked independently across row boundaries.
    pub fn to_ansi_string(&self) -> String {
        // Rough guess: one byte per cell plus separators and a few codes
        let mut out = String::with_capacity(self.width() * self.height() + self.height() * 2 + 64);
        let mut last_fg: Option<Color> = None;
        let mut last_bg: Option<Color> = None;

        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                out.push_str(ROW_SEPARATOR);
            }
            for cell in row {
                if last_fg != Some(cell.fg) {
                    last_fg = Some(cell.fg);
                    push_fg(cell.fg, &mut out);
                }
                if last_bg != Some(cell.bg) {
                    last_bg = Some(cell.bg);
                    push_bg(cell.bg, &mut out);
                }
                out.push(cell.char);
            }
        }

        out
    }
}
