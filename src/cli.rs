//! Command-line interface definition.
//!
//! The argument set is shared by every animation; the program name and the
//! default shown for `--fps` are filled in per animation by [`command_for`].

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::animations::Animation;
use crate::error::PvError;
use crate::player::FrameRate;

pub const ABOUT: &str = "This program outputs the frames of the PV of the song.";

#[derive(Debug, Clone, Parser)]
#[command(about = ABOUT, disable_version_flag = true)]
pub struct Cli {
    /// Skip the first N frames
    #[arg(short = 's', long, value_name = "N")]
    pub skip_frames: Option<usize>,

    /// Override the FPS
    #[arg(short = 'f', long, value_name = "RATE", value_parser = parse_frame_rate)]
    pub fps: Option<FrameRate>,

    /// Print version information and exit
    #[arg(short = 'V', long)]
    pub version: bool,
}

/// Parse a frame rate given as `N`, `N/D` or an exact decimal.
pub fn parse_frame_rate(value: &str) -> Result<FrameRate, String> {
    value.parse().map_err(|e: PvError| e.to_string())
}

/// The `clap::Command` for `animation`.
pub fn command_for(animation: &dyn Animation) -> clap::Command {
    let name = format!("PV of {}", animation.title());
    let fps_help = format!("Override the FPS (default: {})", animation.frame_rate());
    Cli::command()
        .bin_name(name.clone())
        .display_name(name)
        .mut_arg("fps", |arg| arg.help(fps_help))
}

/// Parse the process arguments for `animation`, exiting on usage errors.
#[cfg(not(tarpaulin_include))]
pub fn parse_for(animation: &dyn Animation) -> Cli {
    let matches = command_for(animation).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Parse `args` (including the program name) for `animation`.
pub fn try_parse_for<I, T>(animation: &dyn Animation, args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command_for(animation).try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::Showcase;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        try_parse_for(&Showcase, std::iter::once("asciipv").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        command_for(&Showcase).debug_assert();
    }

    #[test]
    fn no_arguments() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.skip_frames, None);
        assert_eq!(cli.fps, None);
        assert!(!cli.version);
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&["-s", "12", "-f", "30/1", "-V"]).unwrap();
        assert_eq!(cli.skip_frames, Some(12));
        assert_eq!(cli.fps, Some(FrameRate::new(30, 1)));
        assert!(cli.version);

        let cli = parse(&["--skip-frames", "3", "--fps", "29.97"]).unwrap();
        assert_eq!(cli.skip_frames, Some(3));
        assert_eq!(cli.fps, Some(FrameRate::new(2997, 100)));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let err = parse(&["--fps", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_fps_is_rejected() {
        assert!(parse(&["--fps", "fast"]).is_err());
        assert!(parse(&["--fps", "1/0"]).is_err());
    }

    #[test]
    fn negative_skip_is_rejected() {
        assert!(parse(&["--skip-frames", "-1"]).is_err());
    }

    #[test]
    fn help_names_animation_and_default_rate() {
        let help = command_for(&Showcase).render_help().to_string();
        assert!(help.contains(ABOUT));
        assert!(help.contains("PV of asciipv showcase"));
        assert!(help.contains("Override the FPS (default: 6)"));
    }
}
