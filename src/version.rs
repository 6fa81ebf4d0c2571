//! Build information shown in the version banner.

/// Crate version plus build details.
///
/// Development builds carry the git SHA and build date, release builds only
/// the date.
#[cfg(not(feature = "release"))]
pub fn version_string() -> String {
    format!(
        "{} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        short_sha(env!("VERGEN_GIT_SHA")),
        env!("ASCIIPV_BUILD_DATE")
    )
}

#[cfg(feature = "release")]
pub fn version_string() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("ASCIIPV_BUILD_DATE"))
}

#[cfg(not(feature = "release"))]
fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
