//! Terminal data types.
//!
//! Contains the core data structures for representing a frame:
//! - Color: the 18-entry indexed palette used by animation scripts
//! - Cell: A single character with its foreground and background color
//! - Style: A partial color override applied by styled fills

use std::collections::HashMap;

/// Indexed terminal color.
///
/// The discriminants follow the authoring convention used by the animation
/// scripts: 0-7 are the basic ANSI colors, 8 emits nothing, 9 resets to the
/// terminal default and 10-17 are the bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    /// Leaves whatever color the terminal currently has in place
    Inherit = 8,
    /// Resets to the terminal's own default color
    #[default]
    Default = 9,
    BrightBlack = 10,
    BrightRed = 11,
    BrightGreen = 12,
    BrightYellow = 13,
    BrightBlue = 14,
    BrightMagenta = 15,
    BrightCyan = 16,
    BrightWhite = 17,
}

impl Color {
    /// All palette entries in index order.
    pub const ALL: [Color; 18] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Inherit,
        Color::Default,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Look up a color by its palette index.
    ///
    /// Returns `None` for indices outside `0..=17`.
    pub fn from_index(index: u8) -> Option<Color> {
        Self::ALL.get(index as usize).copied()
    }

    /// Palette index of this color.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A single character cell in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The displayed character
    pub char: char,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Color::Default,
            bg: Color::Default,
        }
    }
}

impl Cell {
    /// Create a cell with the given character and colors.
    pub fn new(char: char, fg: Color, bg: Color) -> Self {
        Self { char, fg, bg }
    }
}

/// Color override applied by [`Frame::fill_style`](super::Frame::fill_style).
///
/// `None` leaves the cell's current color untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    /// Override both colors.
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
        }
    }

    /// Override the foreground only.
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    /// Override the background only.
    pub fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
        }
    }
}

/// Mapping from mask character to the color override it stands for.
pub type StyleMap = HashMap<char, Style>;
