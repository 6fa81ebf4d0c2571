//! Fixed-size grid of colored cells.
//!
//! Fill operations write multi-line text into the grid using a simple cursor
//! model:
//! - `\n` moves to the next row and back to the column the fill started at
//! - `\r` moves to column 0 of the grid
//! - `\b` moves one column left (stopping at 0) without erasing
//! - anything else lands in the cell under the cursor and advances it
//!
//! Characters past the right edge are dropped one by one but still advance
//! the cursor. Running past the bottom edge abandons the rest of the fill.

use super::types::{Cell, Color, StyleMap};

const BACKSPACE: char = '\u{8}';

/// A rectangular grid of [`Cell`]s representing one animation state.
///
/// `Clone` produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Frame {
    /// Create a frame of `width` x `height` blank cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::default(); width]; height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at column `x`, row `y`, if inside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }

    /// Mutable cell at column `x`, row `y`, if inside the grid.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.cells.get_mut(y).and_then(|row| row.get_mut(x))
    }

    /// Iterate over the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Reset every cell to a blank space with default colors.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::default());
        }
    }

    /// Write `text` starting at column `x`, row `y`.
    ///
    /// Each written cell gets `fg`/`bg` when supplied; `None` keeps the
    /// cell's current color.
    ///
    /// # Arguments
    /// * `text` - Text to write, may contain `\n`, `\r` and `\b`
    /// * `x` - Starting column, also the column `\n` returns to
    /// * `y` - Starting row
    /// * `fg` - Optional foreground override
    /// * `bg` - Optional background override
    pub fn fill_text(
        &mut self,
        text: &str,
        x: usize,
        y: usize,
        fg: Option<Color>,
        bg: Option<Color>,
    ) {
        self.walk(text, x, y, |cell, ch| {
            cell.char = ch;
            if let Some(fg) = fg {
                cell.fg = fg;
            }
            if let Some(bg) = bg {
                cell.bg = bg;
            }
        });
    }

    /// Recolor cells using `text` as a mask.
    ///
    /// Cursor movement matches [`fill_text`](Self::fill_text). Mask characters
    /// found in `styles` apply their color override to the cell underneath;
    /// other characters only advance the cursor. Glyphs are never changed.
    pub fn fill_style(&mut self, text: &str, styles: &StyleMap, x: usize, y: usize) {
        self.walk(text, x, y, |cell, ch| {
            if let Some(style) = styles.get(&ch) {
                if let Some(fg) = style.fg {
                    cell.fg = fg;
                }
                if let Some(bg) = style.bg {
                    cell.bg = bg;
                }
            }
        });
    }

    /// Drive the fill cursor over `text`, calling `apply` for every plain
    /// character that lands inside the grid.
    fn walk<F>(&mut self, text: &str, x: usize, y: usize, mut apply: F)
    where
        F: FnMut(&mut Cell, char),
    {
        if y >= self.height {
            tracing::trace!(y, height = self.height, "fill starts below the frame, skipped");
            return;
        }

        let head_x = x;
        let mut x = x;
        let mut y = y;

        for ch in text.chars() {
            match ch {
                '\n' => {
                    y += 1;
                    if y >= self.height {
                        tracing::trace!(
                            y,
                            height = self.height,
                            "fill ran off the bottom, aborted"
                        );
                        return;
                    }
                    x = head_x;
                }
                '\r' => x = 0,
                BACKSPACE => x = x.saturating_sub(1),
                _ => {
                    if x < self.width {
                        apply(&mut self.cells[y][x], ch);
                    }
                    x += 1;
                }
            }
        }
    }
}
