//! asciipv - plays pre-choreographed ANSI-art music videos in the terminal
//!
//! An animation is authored ahead of time as a sequence of fixed-size
//! character grids, serialized to ANSI strings, then played back at an
//! exact rational frame rate.

pub mod animations;
pub mod authoring;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod player;
pub mod terminal;
pub mod version;

pub use config::Config;
pub use error::PvError;
