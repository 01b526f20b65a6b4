//! Screen-time timestamps in `MM:SS` form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A screen-time duration rendered as zero-padded `MM:SS`.
///
/// Seconds are conventionally below 60 but this is not enforced; model
/// estimates occasionally arrive as values like `1:75` and are accepted as
/// given. [`Timestamp::total_seconds`] performs the carry arithmetic.
///
/// # Examples
///
/// ```
/// use fellini_core::Timestamp;
///
/// let ts: Timestamp = "1:5".parse().unwrap();
/// assert_eq!(ts.to_string(), "01:05");
/// assert_eq!(ts.total_seconds(), 65);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole minutes
    pub minutes: u32,
    /// Remaining seconds
    pub seconds: u32,
}

impl Timestamp {
    /// Fallback duration substituted for any unparseable estimate.
    ///
    /// Duration estimation is best-effort and must never abort a run, so
    /// malformed model output resolves to 45 seconds instead of an error.
    pub const FALLBACK: Timestamp = Timestamp {
        minutes: 0,
        seconds: 45,
    };

    /// Create a timestamp from minute and second fields.
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    /// Total duration in seconds.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// Parse a free-text duration estimate, falling back to [`Self::FALLBACK`]
    /// on any malformed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use fellini_core::Timestamp;
    ///
    /// assert_eq!(Timestamp::parse_lenient("0:45").to_string(), "00:45");
    /// assert_eq!(Timestamp::parse_lenient("about a minute"), Timestamp::FALLBACK);
    /// ```
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Error produced when a string is not a well-formed `MM:SS` timestamp.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("not a valid MM:SS timestamp: {:?}", raw)]
pub struct ParseTimestampError {
    /// The rejected input
    pub raw: String,
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    /// Strict parse: exactly two colon-separated non-negative integer fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseTimestampError { raw: s.to_string() };

        let trimmed = s.trim();
        let mut fields = trimmed.split(':');
        let (minutes, seconds) = match (fields.next(), fields.next(), fields.next()) {
            (Some(m), Some(sec), None) => (m, sec),
            _ => return Err(error()),
        };

        let minutes: u32 = minutes.trim().parse().map_err(|_| error())?;
        let seconds: u32 = seconds.trim().parse().map_err(|_| error())?;
        Ok(Self { minutes, seconds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_inputs_are_zero_padded() {
        assert_eq!(Timestamp::parse_lenient("0:45").to_string(), "00:45");
        assert_eq!(Timestamp::parse_lenient("1:5").to_string(), "01:05");
        assert_eq!(Timestamp::parse_lenient("12:34").to_string(), "12:34");
        assert_eq!(Timestamp::parse_lenient(" 2:30 ").to_string(), "02:30");
    }

    #[test]
    fn malformed_inputs_fall_back() {
        for raw in ["", "about a minute", "1:2:3", "45", "one:five", ":", "-1:30"] {
            assert_eq!(Timestamp::parse_lenient(raw), Timestamp::FALLBACK, "{raw:?}");
        }
        assert_eq!(Timestamp::FALLBACK.to_string(), "00:45");
    }

    #[test]
    fn strict_parse_rejects_malformed() {
        assert!("1:2:3".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
        assert!("1m30s".parse::<Timestamp>().is_err());
    }

    #[test]
    fn total_seconds_carries_minutes() {
        assert_eq!(Timestamp::new(1, 30).total_seconds(), 90);
        assert_eq!(Timestamp::new(0, 75).total_seconds(), 75);
        assert_eq!(Timestamp::new(0, 0).total_seconds(), 0);
    }
}
