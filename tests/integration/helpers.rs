//! Shared helpers for running the asciipv binary

use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

pub const BIN: &str = env!("CARGO_BIN_EXE_asciipv");

/// A command for the binary, isolated from the user's config and logging.
///
/// The returned `TempDir` holds the (absent) config location and must be
/// kept alive while the command runs.
pub fn asciipv_command(args: &[&str]) -> (Command, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut cmd = Command::new(BIN);
    cmd.args(args)
        .env("ASCIIPV_CONFIG", dir.path().join("config.toml"))
        .env("ASCIIPV_LOG", "off")
        .stdin(Stdio::null());
    (cmd, dir)
}

/// Run the binary to completion and capture output.
pub fn run_asciipv(args: &[&str]) -> (String, String, i32) {
    let (mut cmd, _dir) = asciipv_command(args);
    let output = cmd.output().expect("Failed to execute asciipv");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Run the binary with `config` written as its config file.
pub fn run_with_config(args: &[&str], config: &str) -> (String, String, i32) {
    let (mut cmd, dir) = asciipv_command(args);
    write_config(dir.path(), config);
    let output = cmd.output().expect("Failed to execute asciipv");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn write_config(dir: &Path, content: &str) {
    std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
}

/// Number of frames in captured stdout.
pub fn frames_in(stdout: &str) -> usize {
    stdout.matches(asciipv::player::CURSOR_HOME).count()
}
