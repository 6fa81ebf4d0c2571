//! ANSI escape code tables.
//!
//! Maps palette colors to their SGR escape sequences. Foreground and
//! background have separate tables indexed by [`Color::index`].

use super::types::Color;

/// Foreground escape codes, indexed by palette index.
pub const FG_CODES: [&str; 18] = [
    "\x1b[30m",
    "\x1b[31m",
    "\x1b[32m",
    "\x1b[33m",
    "\x1b[34m",
    "\x1b[35m",
    "\x1b[36m",
    "\x1b[37m",
    "",
    "\x1b[39m",
    "\x1b[90m",
    "\x1b[91m",
    "\x1b[92m",
    "\x1b[93m",
    "\x1b[94m",
    "\x1b[95m",
    "\x1b[96m",
    "\x1b[97m",
];

/// Background escape codes, indexed by palette index.
pub const BG_CODES: [&str; 18] = [
    "\x1b[40m",
    "\x1b[41m",
    "\x1b[42m",
    "\x1b[43m",
    "\x1b[44m",
    "\x1b[45m",
    "\x1b[46m",
    "\x1b[47m",
    "",
    "\x1b[49m",
    "\x1b[100m",
    "\x1b[101m",
    "\x1b[102m",
    "\x1b[103m",
    "\x1b[104m",
    "\x1b[105m",
    "\x1b[106m",
    "\x1b[107m",
];

/// Escape code selecting `color` as the foreground.
#[inline]
pub fn fg_code(color: Color) -> &'static str {
    FG_CODES[color.index() as usize]
}

/// Escape code selecting `color` as the background.
#[inline]
pub fn bg_code(color: Color) -> &'static str {
    BG_CODES[color.index() as usize]
}

/// Append the foreground escape code for `color` to the buffer.
///
/// # Returns
/// `true` if a code was appended, `false` for [`Color::Inherit`]
pub fn push_fg(color: Color, buf: &mut String) -> bool {
    let code = fg_code(color);
    buf.push_str(code);
    !code.is_empty()
}

/// Append the background escape code for `color` to the buffer.
///
/// # Returns
/// `true` if a code was appended, `false` for [`Color::Inherit`]
pub fn push_bg(color: Color, buf: &mut String) -> bool {
    let code = bg_code(color);
    buf.push_str(code);
    !code.is_empty()
}
