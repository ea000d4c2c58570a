use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use bstr::ByteSlice;

/// Suffixes understood in a duration, in the order they are emitted.
const UNITS: [(u8, u64); 3] = [(b'h', 3600), (b'm', 60), (b's', 1)];

/// Format a number of seconds as a compact duration such as `1h 5m`.
///
/// Components which are zero are left out, and seconds are only included if
/// the duration is shorter than an hour. Formatting zero produces an empty
/// string.
///
/// # Examples
///
/// ```
/// use yamlfields::quantity::format_duration;
///
/// assert_eq!(format_duration(0), "");
/// assert_eq!(format_duration(45), "45s");
/// assert_eq!(format_duration(61), "1m 1s");
/// assert_eq!(format_duration(3600), "1h");
/// assert_eq!(format_duration(3661), "1h 1m");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    // Seconds aren't interesting once we're counting hours.
    let seconds = if hours == 0 { seconds % 60 } else { 0 };

    let mut out = String::new();
    let mut buffer = itoa::Buffer::new();

    for ((suffix, _), value) in UNITS.iter().zip([hours, minutes, seconds]) {
        if value == 0 {
            continue;
        }

        if !out.is_empty() {
            out.push(' ');
        }

        out.push_str(buffer.format(value));
        out.push(char::from(*suffix));
    }

    out
}

/// Parse a duration such as `1h 5m 30s` into a number of seconds.
///
/// The input is split on spaces and every token contributes its number
/// multiplied by the unit given by its last character. Tokens can appear in
/// any order and may repeat. Tokens with an unknown unit, or a number which
/// doesn't parse, contribute nothing.
///
/// # Examples
///
/// ```
/// use yamlfields::quantity::parse_duration;
///
/// assert_eq!(parse_duration(""), 0);
/// assert_eq!(parse_duration("2h 30m"), 9000);
/// assert_eq!(parse_duration("90m"), 5400);
/// assert_eq!(parse_duration("30s 1m 30s"), 120);
/// assert_eq!(parse_duration("3x"), 0);
/// ```
#[must_use]
pub fn parse_duration(text: &str) -> u64 {
    let mut total = 0u64;

    for token in text.as_bytes().split_str(" ") {
        let Some((suffix, number)) = token.split_last() else {
            continue;
        };

        let Some((_, multiplier)) = UNITS.iter().find(|(unit, _)| unit == suffix) else {
            continue;
        };

        let number = lexical_core::parse::<u64>(number).unwrap_or_default();
        total = total.saturating_add(number.saturating_mul(*multiplier));
    }

    total
}

/// A duration counted in whole seconds.
///
/// The [`Display`][fmt::Display] and [`FromStr`] implementations use the
/// compact form described in [`format_duration`] and [`parse_duration`].
///
/// # Examples
///
/// ```
/// use yamlfields::quantity::Duration;
///
/// let duration: Duration = "1h 30m".parse()?;
/// assert_eq!(duration.get(), 5400);
/// assert_eq!(duration.to_string(), "1h 30m");
///
/// let std = std::time::Duration::from(duration);
/// assert_eq!(std.as_secs(), 5400);
/// # Ok::<_, std::convert::Infallible>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Duration(u64);

impl Duration {
    /// Construct a duration from a number of seconds.
    #[must_use]
    #[inline]
    pub const fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Get the number of seconds in the duration.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Duration {
    #[inline]
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

impl From<Duration> for u64 {
    #[inline]
    fn from(duration: Duration) -> Self {
        duration.0
    }
}

impl From<Duration> for std::time::Duration {
    #[inline]
    fn from(duration: Duration) -> Self {
        std::time::Duration::from_secs(duration.0)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

impl FromStr for Duration {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_duration(s)))
    }
}
