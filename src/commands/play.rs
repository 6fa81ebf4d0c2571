//! Playback handler

use std::io;

use anyhow::{Context, Result};

use asciipv::animations::{self, Animation};
use asciipv::cli::Cli;
use asciipv::player::{presented_message, CancelToken, PlaybackResult, Player};
use asciipv::{logging, Config};

/// Compose the animation and play it to stdout.
///
/// An interrupted playback is not an error: the number of frames shown is
/// reported on stderr and the process exits normally.
#[cfg(not(tarpaulin_include))]
pub fn handle(animation: &dyn Animation, cli: &Cli) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    logging::init(&config.logging.level);

    let mut frames = animations::compose(animation);
    if let Some(skip) = cli.skip_frames {
        let skipped = frames.skip_leading(skip);
        tracing::debug!(
            requested = skip,
            skipped,
            remaining = frames.len(),
            "skipped leading frames"
        );
    }

    warn_if_terminal_too_small(animation.size());

    // Ctrl-C while composing keeps its default behavior
    let cancel = CancelToken::install_ctrlc()?;
    let rate = cli.fps.unwrap_or_else(|| animation.frame_rate());
    let player = Player::new(rate).with_tick(config.tick()).with_cancel(cancel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = player
        .play(frames.as_slice(), &mut out)
        .context("Failed to write frames")?;

    if let PlaybackResult::Interrupted(presented) = result {
        eprintln!("{}", presented_message(presented));
    }
    Ok(())
}

/// Warn when stdout is a terminal too small to hold a whole frame.
#[cfg(not(tarpaulin_include))]
fn warn_if_terminal_too_small((width, height): (usize, usize)) {
    if !atty::is(atty::Stream::Stdout) {
        return;
    }
    match crossterm::terminal::size() {
        Ok((cols, rows)) if usize::from(cols) < width || usize::from(rows) < height => {
            tracing::warn!(
                cols,
                rows,
                width,
                height,
                "terminal is smaller than the animation, frames will wrap"
            );
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "could not query terminal size"),
    }
}
