//! Integration tests for argument handling and the version banner

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{frames_in, run_asciipv, BIN};

// ============================================================================
// Version
// ============================================================================

#[test]
fn version_prints_banner_and_exits_0() {
    let (stdout, stderr, exit_code) = run_asciipv(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("PV of asciipv showcase\nProgram: asciipv "));
    assert_eq!(frames_in(&stdout), 0);
    assert!(stderr.is_empty());
}

#[test]
fn short_version_flag() {
    Command::new(BIN)
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PV of "))
        .stdout(predicate::str::contains("\x1b[H").not());
}

#[test]
fn snapshot_banner_title() {
    let (stdout, _stderr, _exit_code) = run_asciipv(&["--version"]);
    let title = stdout.lines().next().unwrap_or_default();
    insta::assert_snapshot!(title, @"PV of asciipv showcase");
}

#[test]
fn version_wins_over_other_flags() {
    let (stdout, _stderr, exit_code) = run_asciipv(&["--skip-frames", "2", "--fps", "1000", "-V"]);

    assert_eq!(exit_code, 0);
    assert_eq!(frames_in(&stdout), 0);
    assert!(stdout.contains("Program: "));
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn help_describes_program() {
    let (stdout, _stderr, exit_code) = run_asciipv(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("This program outputs the frames of the PV of the song."));
    assert!(stdout.contains("--skip-frames"));
    assert!(stdout.contains("Override the FPS (default: 6)"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn zero_fps_exits_2() {
    let (stdout, stderr, exit_code) = run_asciipv(&["--fps", "0"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid frame rate"));
}

#[test]
fn malformed_fps_exits_2() {
    let (_stdout, _stderr, exit_code) = run_asciipv(&["--fps", "1/0"]);
    assert_eq!(exit_code, 2);
}

#[test]
fn unknown_argument_exits_2() {
    let (stdout, stderr, exit_code) = run_asciipv(&["--loop"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("--loop"));
}
