//! Integration tests for frame output

use asciipv::animations::{self, Showcase};
use asciipv::player::CURSOR_HOME;

use crate::helpers::{frames_in, run_asciipv, run_with_config};

fn total_frames() -> usize {
    animations::compose(&Showcase).len()
}

#[test]
fn plays_every_frame_in_order() {
    let (stdout, stderr, exit_code) = run_asciipv(&["--fps", "1000"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.is_empty());

    let expected: String = animations::compose(&Showcase)
        .iter()
        .map(|frame| format!("{}{}", CURSOR_HOME, frame))
        .collect();
    assert!(stdout == expected, "stdout differs from the composed frames");
}

#[test]
fn skip_frames_starts_at_index() {
    let skip = 30;
    let skip_arg = skip.to_string();
    let (stdout, _stderr, exit_code) =
        run_asciipv(&["--fps", "1000", "--skip-frames", &skip_arg]);

    assert_eq!(exit_code, 0);
    assert_eq!(frames_in(&stdout), total_frames() - skip);

    let frames = animations::compose(&Showcase);
    let first = format!("{}{}", CURSOR_HOME, frames.as_slice()[skip]);
    assert!(stdout.starts_with(&first));
}

#[test]
fn skip_all_frames_plays_nothing() {
    let (stdout, stderr, exit_code) = run_asciipv(&["-s", "1000"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn decimal_fps_is_accepted() {
    let (stdout, _stderr, exit_code) = run_asciipv(&["-f", "999.5", "-s", "36"]);

    assert_eq!(exit_code, 0);
    assert_eq!(frames_in(&stdout), 2);
}

#[test]
fn config_tick_is_honored() {
    let (stdout, _stderr, exit_code) =
        run_with_config(&["--fps", "1000", "-s", "35"], "[playback]\ntick_ms = 2\n");

    assert_eq!(exit_code, 0);
    assert_eq!(frames_in(&stdout), 3);
}

#[test]
fn malformed_config_exits_1() {
    let (stdout, stderr, exit_code) = run_with_config(&["--fps", "1000"], "[playback\n");

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to load configuration"));
}

#[cfg(unix)]
mod interrupt {
    use std::io::Read;
    use std::time::{Duration, Instant};

    use predicates::prelude::*;

    use crate::helpers::{asciipv_command, frames_in};
    use std::process::Stdio;

    #[test]
    fn sigint_reports_presented_frames() {
        let (mut cmd, _dir) = asciipv_command(&["--fps", "4"]);
        let mut child = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn asciipv");

        // Wait for the second frame so playback is well under way
        let mut stdout = child.stdout.take().expect("stdout is piped");
        let mut captured = Vec::new();
        let mut chunk = [0u8; 4096];
        let started = Instant::now();
        while frames_in(&String::from_utf8_lossy(&captured)) < 2 {
            assert!(started.elapsed() < Duration::from_secs(30), "no frames produced");
            let n = stdout.read(&mut chunk).expect("Failed to read stdout");
            assert!(n > 0, "stdout closed early");
            captured.extend_from_slice(&chunk[..n]);
        }

        let pid = libc::pid_t::try_from(child.id()).expect("pid fits");
        // SAFETY: sending a signal to our own child process
        let rc = unsafe { libc::kill(pid, libc::SIGINT) };
        assert_eq!(rc, 0);

        stdout.read_to_end(&mut captured).expect("Failed to read stdout");
        let mut stderr = String::new();
        child
            .stderr
            .take()
            .expect("stderr is piped")
            .read_to_string(&mut stderr)
            .expect("Failed to read stderr");
        let status = child.wait().expect("Failed to wait for asciipv");

        assert_eq!(status.code(), Some(0));
        assert!(predicate::str::is_match(r"^\d+ frames? presented\n$")
            .expect("valid regex")
            .eval(&stderr));

        let presented = frames_in(&String::from_utf8_lossy(&captured));
        assert!(presented >= 2);
        let expected = if presented == 1 {
            "1 frame presented\n".to_string()
        } else {
            format!("{} frames presented\n", presented)
        };
        assert_eq!(stderr, expected);
    }
}
