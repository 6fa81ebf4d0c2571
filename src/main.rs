//! asciipv CLI entry point

mod commands;

use anyhow::Result;

use asciipv::animations::Showcase;
use asciipv::cli;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let animation = Showcase;
    let cli = cli::parse_for(&animation);

    if cli.version {
        commands::version::handle(&animation);
        return Ok(());
    }

    commands::play::handle(&animation, &cli)
}
