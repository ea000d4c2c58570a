use core::fmt;
use std::io;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::enums::NamedEnum;
use crate::quantity::{format_duration, format_file_size};
use crate::yaml::scalar::{self, Context};

/// How file sizes and durations are written by an [`Emitter`].
///
/// Both styles are understood when reading, but only the raw style
/// preserves the exact value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuantityStyle {
    /// Write the number of bytes or seconds as an integer.
    #[default]
    Raw,
    /// Write a human readable string such as `2.50 MB` or `1h 5m`.
    Human,
}

/// Options used to configure an [`Emitter`].
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let options = yaml::Options::new()
///     .with_indent(4)
///     .with_quantities(yaml::QuantityStyle::Human);
///
/// let mut out = yaml::Emitter::with_options(options);
/// out.mapping("limits", |out| {
///     out.file_size("max-size", 2_500_000);
///     out.duration("timeout", 5400);
/// });
///
/// assert_eq!(out.as_str(), "limits:\n    max-size: 2.50 MB\n    timeout: 1h 30m\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Options {
    indent: usize,
    quantities: QuantityStyle,
}

impl Options {
    /// Construct the default options, indenting by two spaces and writing
    /// quantities as raw integers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indent: 2,
            quantities: QuantityStyle::Raw,
        }
    }

    /// Set the number of spaces used for each level of indentation.
    ///
    /// The indentation is kept within `1..=9`.
    #[must_use]
    pub fn with_indent(self, indent: usize) -> Self {
        Self {
            indent: indent.clamp(1, 9),
            ..self
        }
    }

    /// Set how file sizes and durations are written.
    #[must_use]
    pub fn with_quantities(self, quantities: QuantityStyle) -> Self {
        Self { quantities, ..self }
    }
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the fields of a YAML mapping.
///
/// Every method writes a single `key: value` entry. Strings are quoted only
/// when they would otherwise not read back as the same string.
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let mut out = yaml::Emitter::new();
/// out.string("name", "backup");
/// out.bool("enabled", true);
/// out.u64("retries", 3);
/// out.string_list("tags", &["nightly", "offsite"], true);
/// out.string("comment", "null");
///
/// assert_eq!(
///     out.as_str(),
///     "name: backup\nenabled: true\nretries: 3\ntags: [nightly, offsite]\ncomment: 'null'\n"
/// );
///
/// let node: serde_yaml::Value = serde_yaml::from_str(out.as_str())?;
/// assert_eq!(yaml::string_from(&node, "comment", "")?, "null");
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Emitter {
    out: String,
    options: Options,
    depth: usize,
}

impl Emitter {
    /// Construct a new emitter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::new())
    }

    /// Construct a new emitter with the given options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            out: String::new(),
            options,
            depth: 0,
        }
    }

    /// Write a string.
    pub fn string(&mut self, key: &str, value: &str) {
        self.key(key);
        self.out.push(' ');
        scalar::write(&mut self.out, value, Context::Block);
        self.out.push('\n');
    }

    /// Write a boolean.
    pub fn bool(&mut self, key: &str, value: bool) {
        self.raw(key, if value { "true" } else { "false" });
    }

    /// Write a signed 32-bit integer.
    pub fn i32(&mut self, key: &str, value: i32) {
        let mut buffer = itoa::Buffer::new();
        self.raw(key, buffer.format(value));
    }

    /// Write an unsigned 64-bit integer.
    pub fn u64(&mut self, key: &str, value: u64) {
        let mut buffer = itoa::Buffer::new();
        self.raw(key, buffer.format(value));
    }

    /// Write a list of strings.
    ///
    /// Nothing is written if the list is empty, and empty strings in the
    /// list are skipped. A `compact` list is written as a flow sequence,
    /// otherwise every item goes on a line of its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlfields::yaml;
    ///
    /// let mut out = yaml::Emitter::new();
    /// out.string_list("flow", &["a", "", "b"], true);
    /// out.string_list("block", &["a", "b"], false);
    /// out.string_list("empty", &[] as &[&str], true);
    ///
    /// assert_eq!(out.as_str(), "flow: [a, b]\nblock:\n  - a\n  - b\n");
    /// ```
    pub fn string_list<S>(&mut self, key: &str, items: &[S], compact: bool)
    where
        S: AsRef<str>,
    {
        if items.is_empty() {
            return;
        }

        let mut items = items
            .iter()
            .map(S::as_ref)
            .filter(|item| !item.is_empty())
            .peekable();

        self.key(key);

        if items.peek().is_none() {
            self.out.push_str(" []\n");
            return;
        }

        if compact {
            self.out.push_str(" [");

            for (index, item) in items.enumerate() {
                if index > 0 {
                    self.out.push_str(", ");
                }

                scalar::write(&mut self.out, item, Context::Flow);
            }

            self.out.push_str("]\n");
        } else {
            self.out.push('\n');
            let width = (self.depth + 1) * self.options.indent;

            for item in items {
                self.indent(width);
                self.out.push_str("- ");
                scalar::write(&mut self.out, item, Context::Block);
                self.out.push('\n');
            }
        }
    }

    /// Write a string as a literal block, preserving its lines.
    ///
    /// Nothing is written for an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlfields::yaml;
    ///
    /// let mut out = yaml::Emitter::new();
    /// out.literal("notes", "first line\nsecond line");
    /// out.literal("empty", "");
    ///
    /// assert_eq!(out.as_str(), "notes: |-\n  first line\n  second line\n");
    /// ```
    pub fn literal(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }

        let body = value.trim_end_matches('\n');
        let trailing = value.len() - body.len();

        // Literal blocks can't represent these, so fall back to escaping.
        if body.is_empty()
            || body.chars().any(|c| {
                matches!(c, '\r' | '\u{2028}' | '\u{2029}')
                    || (c.is_control() && c != '\n' && c != '\t')
            })
        {
            self.string(key, value);
            return;
        }

        self.key(key);
        self.out.push_str(" |");

        // Leading spaces would otherwise be taken as indentation.
        let first = body.split('\n').find(|line| !line.is_empty());

        if first.map_or(false, |line| line.starts_with(' ')) {
            let mut buffer = itoa::Buffer::new();
            self.out.push_str(buffer.format(self.options.indent));
        }

        match trailing {
            0 => self.out.push('-'),
            1 => {}
            _ => self.out.push('+'),
        }

        self.out.push('\n');
        let width = (self.depth + 1) * self.options.indent;

        for line in body.split('\n') {
            if !line.is_empty() {
                self.indent(width);
                self.out.push_str(line);
            }

            self.out.push('\n');
        }

        for _ in 1..trailing {
            self.out.push('\n');
        }
    }

    /// Write a date in the ISO 8601 format `YYYY-MM-DD`.
    pub fn date(&mut self, key: &str, value: NaiveDate) {
        self.raw(key, &value.format("%Y-%m-%d").to_string());
    }

    /// Write a date and time in UTC, such as `2023-05-01T12:30:00Z`.
    pub fn date_time(&mut self, key: &str, value: DateTime<Utc>) {
        self.raw(key, &value.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    /// Write a file size in bytes, in the configured [`QuantityStyle`].
    pub fn file_size(&mut self, key: &str, bytes: u64) {
        match self.options.quantities {
            QuantityStyle::Raw => self.u64(key, bytes),
            QuantityStyle::Human => self.string(key, &format_file_size(bytes)),
        }
    }

    /// Write a duration in seconds, in the configured [`QuantityStyle`].
    pub fn duration(&mut self, key: &str, seconds: u64) {
        match self.options.quantities {
            QuantityStyle::Raw => self.u64(key, seconds),
            QuantityStyle::Human => self.string(key, &format_duration(seconds)),
        }
    }

    /// Write an enumeration by name.
    pub fn named<E>(&mut self, key: &str, value: E)
    where
        E: NamedEnum,
    {
        self.string(key, value.name());
    }

    /// Write a nested mapping, whose fields are written by `f`.
    ///
    /// A mapping without any fields is written as `{}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlfields::yaml;
    ///
    /// let mut out = yaml::Emitter::new();
    /// out.mapping("server", |out| {
    ///     out.string("host", "localhost");
    ///     out.mapping("tls", |_| {});
    /// });
    ///
    /// assert_eq!(out.as_str(), "server:\n  host: localhost\n  tls: {}\n");
    /// ```
    pub fn mapping<F>(&mut self, key: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.key(key);
        let header = self.out.len();
        self.out.push('\n');

        self.depth += 1;
        f(self);
        self.depth -= 1;

        if self.out.len() == header + 1 {
            self.out.truncate(header);
            self.out.push_str(" {}\n");
        }
    }

    /// Test if nothing has been written yet.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get the document written so far.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Coerce into the written document.
    #[must_use]
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Write the document to the given [`io::Write`] implementation.
    ///
    /// # Errors
    ///
    /// Errors if the underlying writer fails.
    pub fn write_to<W>(&self, mut o: W) -> io::Result<()>
    where
        W: io::Write,
    {
        o.write_all(self.out.as_bytes())
    }

    fn key(&mut self, key: &str) {
        self.indent(self.depth * self.options.indent);
        scalar::write(&mut self.out, key, Context::Block);
        self.out.push(':');
    }

    /// Write a value which never needs quoting.
    fn raw(&mut self, key: &str, value: &str) {
        self.key(key);
        self.out.push(' ');
        self.out.push_str(value);
        self.out.push('\n');
    }

    fn indent(&mut self, width: usize) {
        self.out.extend(core::iter::repeat(' ').take(width));
    }
}

impl fmt::Display for Emitter {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}
