//! CLI command handlers

pub mod play;
pub mod version;
