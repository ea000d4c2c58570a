//! Human-friendly encodings for durations and byte sizes.
//!
//! Both quantities have a canonical value, an unsigned count of seconds or
//! bytes, and a compact textual form meant for people editing configuration
//! by hand:
//!
//! * Durations are written as `1h 5m`, `12m 30s` or `45s`.
//! * File sizes are written as `2.50 MB`, using decimal units (1 KB is 1000
//!   bytes) the same way macOS Finder does.
//!
//! Parsing is lenient and never fails. Tokens which can't be understood
//! contribute nothing to the result rather than raising an error.
//!
//! The textual form is lossy. Formatting a duration with a nonzero hour
//! component drops the seconds, and file sizes are rounded *up* to two
//! decimals in the chosen unit.
//!
//! # Examples
//!
//! ```
//! use yamlfields::quantity;
//!
//! assert_eq!(quantity::format_duration(3661), "1h 1m");
//! assert_eq!(quantity::parse_duration("2h 30m"), 9000);
//!
//! assert_eq!(quantity::format_file_size(1500), "1.50 KB");
//! assert_eq!(quantity::parse_file_size("1.50 KB"), 1500);
//! ```

#[cfg(test)]
mod tests;

mod duration;
pub use self::duration::{format_duration, parse_duration, Duration};

mod file_size;
pub use self::file_size::{format_file_size, parse_file_size, FileSize};

#[cfg(feature = "serde")]
mod serde;
