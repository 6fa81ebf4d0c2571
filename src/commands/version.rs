//! Version banner handler

use asciipv::animations::Animation;

/// Print the animation's banner to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(animation: &dyn Animation) {
    println!("{}", animation.banner());
}
