use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use bstr::ByteSlice;

/// Decimal size units and their scale, smallest first.
const UNITS: [(&str, f64); 7] = [
    ("B", 1.0),
    ("KB", 1e3),
    ("MB", 1e6),
    ("GB", 1e9),
    ("TB", 1e12),
    ("PB", 1e15),
    ("EB", 1e18),
];

/// Format a number of bytes as a human readable size such as `2.50 MB`.
///
/// The largest unit which keeps the number below 1000 is used, and the
/// number is rounded *up* to two decimals. Units are decimal, so `1 KB` is
/// `1000` bytes. Formatting zero produces an empty string.
///
/// # Examples
///
/// ```
/// use yamlfields::quantity::format_file_size;
///
/// assert_eq!(format_file_size(0), "");
/// assert_eq!(format_file_size(999), "999.00 B");
/// assert_eq!(format_file_size(1500), "1.50 KB");
/// assert_eq!(format_file_size(1234), "1.24 KB");
/// assert_eq!(format_file_size(2_500_000), "2.50 MB");
/// ```
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::new();
    }

    let mut value = bytes as f64;
    let mut index = 0;

    while value.ceil() >= 1000.0 && index + 1 < UNITS.len() {
        value /= 1000.0;
        index += 1;
    }

    let value = (value * 100.0).ceil() / 100.0;
    let (unit, _) = UNITS[index];
    format!("{value:.2} {unit}")
}

/// Parse a human readable size such as `2.50 MB` into a number of bytes.
///
/// A number without a unit, or with a unit that isn't recognized, is taken
/// to be a number of bytes. A number which doesn't parse counts as zero.
///
/// # Examples
///
/// ```
/// use yamlfields::quantity::parse_file_size;
///
/// assert_eq!(parse_file_size("1.50 KB"), 1500);
/// assert_eq!(parse_file_size("2 GB"), 2_000_000_000);
/// assert_eq!(parse_file_size("500"), 500);
/// assert_eq!(parse_file_size("10 XX"), 10);
/// assert_eq!(parse_file_size("lots"), 0);
/// ```
#[must_use]
pub fn parse_file_size(text: &str) -> u64 {
    let mut parts = text.as_bytes().split_str(" ");

    let number = parts
        .next()
        .and_then(|number| lexical_core::parse::<f64>(number).ok())
        .unwrap_or_default();

    let scale = parts
        .next()
        .and_then(|unit| UNITS.iter().find(|(name, _)| name.as_bytes() == unit))
        .map_or(1.0, |(_, scale)| *scale);

    // Truncates towards zero. Float to integer casts saturate, and NaN
    // becomes zero.
    (number * scale) as u64
}

/// A size counted in bytes.
///
/// The [`Display`][fmt::Display] and [`FromStr`] implementations use the
/// human readable form described in [`format_file_size`] and
/// [`parse_file_size`]. Since that form rounds, converting to a string and
/// back might not produce the same size.
///
/// # Examples
///
/// ```
/// use yamlfields::quantity::FileSize;
///
/// let size: FileSize = "2.50 MB".parse()?;
/// assert_eq!(size.get(), 2_500_000);
/// assert_eq!(size.to_string(), "2.50 MB");
/// # Ok::<_, std::convert::Infallible>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    /// Construct a size from a number of bytes.
    #[must_use]
    #[inline]
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Get the number of bytes.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileSize {
    #[inline]
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<FileSize> for u64 {
    #[inline]
    fn from(size: FileSize) -> Self {
        size.0
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_file_size(self.0))
    }
}

impl FromStr for FileSize {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_file_size(s)))
    }
}
