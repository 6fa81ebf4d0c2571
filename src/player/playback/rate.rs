//! Exact frame rate arithmetic.
//!
//! Frame deadlines are compared in integer nanoseconds scaled by the rate's
//! numerator, so no rounding error builds up no matter how many frames are
//! played.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use num_rational::Ratio;

use crate::error::PvError;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Frames per second as an exact, strictly positive fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRate(Ratio<u64>);

impl FrameRate {
    /// Create a frame rate of `numer / denom` frames per second.
    ///
    /// # Panics
    /// Panics if either part is zero. Use [`FrameRate::try_new`] for
    /// untrusted input.
    pub fn new(numer: u64, denom: u64) -> Self {
        match Self::try_new(numer, denom) {
            Ok(rate) => rate,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a frame rate, rejecting zero numerators and denominators.
    pub fn try_new(numer: u64, denom: u64) -> Result<Self, PvError> {
        if numer == 0 || denom == 0 {
            return Err(PvError::InvalidFrameRate(format!("{}/{}", numer, denom)));
        }
        Ok(Self(Ratio::new(numer, denom)))
    }

    /// Whole frames per second.
    pub fn per_second(fps: u64) -> Self {
        Self::new(fps, 1)
    }

    /// Reduced numerator.
    #[inline]
    pub fn numer(&self) -> u64 {
        *self.0.numer()
    }

    /// Reduced denominator.
    #[inline]
    pub fn denom(&self) -> u64 {
        *self.0.denom()
    }

    /// The exact rate as a ratio.
    #[inline]
    pub fn as_ratio(&self) -> Ratio<u64> {
        self.0
    }

    /// Exact seconds per frame (the reciprocal of the rate).
    pub fn seconds_per_frame(&self) -> Ratio<u64> {
        self.0.recip()
    }

    /// Whether `elapsed` has reached the deadline of frame `index`,
    /// i.e. `elapsed >= index / rate`.
    pub fn is_due(&self, elapsed: Duration, index: u64) -> bool {
        elapsed.as_nanos() * self.numer() as u128
            >= index as u128 * self.denom() as u128 * NANOS_PER_SEC
    }

    /// Offset of frame `index`'s deadline from the start, rounded up to the
    /// next nanosecond. Saturates at `u64::MAX` nanoseconds.
    pub fn offset(&self, index: u64) -> Duration {
        let scaled = index as u128 * self.denom() as u128 * NANOS_PER_SEC;
        let numer = self.numer() as u128;
        let nanos = (scaled + numer - 1) / numer;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Approximate rate for display and logging only.
    pub fn as_f64(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }
}

impl fmt::Display for FrameRate {
    /// Formats like `17/3`, or `6` for whole rates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FrameRate {
    type Err = PvError;

    /// Parse `"N"`, `"N/D"` or a decimal such as `"29.97"`.
    ///
    /// Decimals are converted exactly (`29.97` is `2997/100`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || PvError::InvalidFrameRate(s.to_string());

        let ratio = if let Some((int_part, frac_part)) = s.split_once('.') {
            if frac_part.contains('/') {
                return Err(invalid());
            }
            parse_decimal(int_part, frac_part).ok_or_else(invalid)?
        } else {
            Ratio::<u64>::from_str(s).map_err(|_| invalid())?
        };

        if ratio == Ratio::from_integer(0) {
            return Err(invalid());
        }
        Ok(Self(ratio))
    }
}

/// Exact value of `int_part.frac_part`, or `None` if either part is not a
/// run of ASCII digits (one side may be empty, not both).
fn parse_decimal(int_part: &str, frac_part: &str) -> Option<Ratio<u64>> {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return None;
    }

    let scale = 10u64.checked_pow(u32::try_from(frac_part.len()).ok()?)?;
    let int_value: u64 = if int_part.is_empty() { 0 } else { int_part.parse().ok()? };
    let frac_value: u64 = if frac_part.is_empty() { 0 } else { frac_part.parse().ok()? };
    let numer = int_value.checked_mul(scale)?.checked_add(frac_value)?;
    Some(Ratio::new(numer, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reduces_fraction() {
        let rate = FrameRate::new(34, 6);
        assert_eq!(rate.numer(), 17);
        assert_eq!(rate.denom(), 3);
    }

    #[test]
    fn try_new_rejects_zero_parts() {
        assert!(FrameRate::try_new(0, 1).is_err());
        assert!(FrameRate::try_new(1, 0).is_err());
    }

    #[test]
    #[should_panic]
    fn new_panics_on_zero() {
        let _ = FrameRate::new(0, 3);
    }

    #[test]
    fn display_matches_fraction_notation() {
        assert_eq!(FrameRate::new(17, 3).to_string(), "17/3");
        assert_eq!(FrameRate::new(6, 1).to_string(), "6");
        assert_eq!(FrameRate::new(1507, 300).to_string(), "1507/300");
    }

    #[test]
    fn parse_integer_and_fraction() {
        assert_eq!("60".parse::<FrameRate>().unwrap(), FrameRate::per_second(60));
        assert_eq!("30/1".parse::<FrameRate>().unwrap(), FrameRate::per_second(30));
        assert_eq!("17/3".parse::<FrameRate>().unwrap(), FrameRate::new(17, 3));
        assert_eq!(" 8/2 ".parse::<FrameRate>().unwrap(), FrameRate::per_second(4));
    }

    #[test]
    fn parse_decimal_is_exact() {
        assert_eq!("29.97".parse::<FrameRate>().unwrap(), FrameRate::new(2997, 100));
        assert_eq!("0.5".parse::<FrameRate>().unwrap(), FrameRate::new(1, 2));
        assert_eq!(".25".parse::<FrameRate>().unwrap(), FrameRate::new(1, 4));
        assert_eq!("12.".parse::<FrameRate>().unwrap(), FrameRate::per_second(12));
    }

    #[test]
    fn parse_rejects_invalid_rates() {
        for input in ["", "0", "0/5", "5/0", "abc", "-3", "1.2.3", ".", "1.5/2", "1e3"] {
            assert!(input.parse::<FrameRate>().is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn seconds_per_frame_is_reciprocal() {
        let spf = FrameRate::new(17, 3).seconds_per_frame();
        assert_eq!(*spf.numer(), 3);
        assert_eq!(*spf.denom(), 17);
    }

    #[test]
    fn is_due_is_exact_at_the_boundary() {
        // 3 fps: frame 1 is due at exactly 333_333_333.33.. ns
        let rate = FrameRate::per_second(3);
        assert!(!rate.is_due(Duration::from_nanos(333_333_333), 1));
        assert!(rate.is_due(Duration::from_nanos(333_333_334), 1));
        // frame 3 is due at exactly one second
        assert!(!rate.is_due(Duration::from_nanos(999_999_999), 3));
        assert!(rate.is_due(Duration::from_secs(1), 3));
    }

    #[test]
    fn offset_rounds_up_and_does_not_drift() {
        let rate = FrameRate::new(17, 3);
        // 17 frames at 17/3 fps take exactly three seconds
        assert_eq!(rate.offset(17), Duration::from_secs(3));
        assert_eq!(rate.offset(17 * 1000), Duration::from_secs(3000));
        assert!(rate.is_due(rate.offset(5), 5));
        assert!(!rate.is_due(rate.offset(5) - Duration::from_nanos(1), 5));
    }

    #[test]
    fn offset_of_frame_zero_is_zero() {
        assert_eq!(FrameRate::new(1507, 300).offset(0), Duration::ZERO);
    }
}
