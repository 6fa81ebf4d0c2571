//! Terminal frame buffer module.
//!
//! Provides the colored character grid that animations draw into and the
//! serializer that turns it into a compact ANSI string for playback.

mod frame;
pub mod palette;
mod serialize;
mod types;

#[cfg(test)]
mod tests;

pub use frame::Frame;
pub use serialize::ROW_SEPARATOR;
pub use types::{Cell, Color, Style, StyleMap};
