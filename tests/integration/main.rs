//! Integration tests for the asciipv binary

mod cli_test;
mod helpers;
mod playback_test;
