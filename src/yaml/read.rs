use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_yaml::Value;

use crate::enums::{self, NamedEnum};
use crate::quantity::{parse_duration, parse_file_size, Duration, FileSize};
use crate::yaml::{Error, ErrorKind};

/// A type which can be read out of a single YAML value.
///
/// This is implemented for every type supported by [`read`]. The value
/// passed in is never `null`, since a `null` field is treated the same way
/// as a missing one.
pub trait FromYaml: Sized {
    /// Convert the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Errors if the value has a shape which can't be converted.
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error>;
}

/// A list of strings read through [`lenient_string_list_from`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct StringList {
    /// The items of the list.
    pub items: Vec<String>,
    /// Indicates that the list was stored as a comma-separated scalar, and
    /// that the document should be saved again to store it as a sequence.
    pub needs_save: bool,
}

/// Read the field `key` out of `node`, or use `default` if it is missing or
/// `null`.
///
/// # Errors
///
/// Errors if the field is present but can't be converted into `T`.
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let node: serde_yaml::Value = serde_yaml::from_str(r#"
/// name: backup
/// retries: 3
/// "#)?;
///
/// assert_eq!(yaml::read(&node, "retries", 0u64)?, 3);
/// assert_eq!(yaml::read(&node, "timeout", 30u64)?, 30);
/// assert_eq!(yaml::read(&node, "name", String::new())?, "backup");
/// assert!(yaml::read(&node, "name", 0u64).is_err());
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn read<T>(node: &Value, key: &str, default: T) -> Result<T, Error>
where
    T: FromYaml,
{
    match field(node, key) {
        Some(value) => T::from_yaml(value, key),
        None => Ok(default),
    }
}

/// Read a boolean field.
///
/// Besides YAML booleans, the strings `yes`, `no`, `on`, `off`, `y` and `n`
/// are understood.
///
/// # Errors
///
/// Errors if the field is present but isn't a boolean.
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let node: serde_yaml::Value = serde_yaml::from_str("hidden: yes")?;
/// assert!(yaml::bool_from(&node, "hidden", false)?);
/// assert!(yaml::bool_from(&node, "missing", true)?);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[inline]
pub fn bool_from(node: &Value, key: &str, default: bool) -> Result<bool, Error> {
    read(node, key, default)
}

/// Read a signed 32-bit integer field.
///
/// # Errors
///
/// Errors if the field is present but isn't an integer which fits.
#[inline]
pub fn i32_from(node: &Value, key: &str, default: i32) -> Result<i32, Error> {
    read(node, key, default)
}

/// Read an unsigned 64-bit integer field.
///
/// # Errors
///
/// Errors if the field is present but isn't an integer which fits.
#[inline]
pub fn u64_from(node: &Value, key: &str, default: u64) -> Result<u64, Error> {
    read(node, key, default)
}

/// Read a file size in bytes.
///
/// The field can either be an integer number of bytes or a string such as
/// `2.50 MB`.
///
/// # Errors
///
/// Errors if the field is a sequence or a mapping. Any scalar is accepted,
/// text which doesn't parse produces zero.
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let node: serde_yaml::Value = serde_yaml::from_str(r#"
/// raw: 1500
/// human: 1.50 KB
/// "#)?;
///
/// assert_eq!(yaml::file_size_from(&node, "raw", 0)?, 1500);
/// assert_eq!(yaml::file_size_from(&node, "human", 0)?, 1500);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[inline]
pub fn file_size_from(node: &Value, key: &str, default: u64) -> Result<u64, Error> {
    read(node, key, FileSize::from_bytes(default)).map(FileSize::get)
}

/// Read a duration in seconds.
///
/// The field can either be an integer number of seconds or a string such as
/// `1h 30m`.
///
/// # Errors
///
/// Errors if the field is a sequence or a mapping. Any scalar is accepted,
/// text which doesn't parse produces zero.
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let node: serde_yaml::Value = serde_yaml::from_str(r#"
/// raw: 5400
/// human: 1h 30m
/// "#)?;
///
/// assert_eq!(yaml::duration_from(&node, "raw", 0)?, 5400);
/// assert_eq!(yaml::duration_from(&node, "human", 0)?, 5400);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[inline]
pub fn duration_from(node: &Value, key: &str, default: u64) -> Result<u64, Error> {
    read(node, key, Duration::from_secs(default)).map(Duration::get)
}

/// Read a string field.
///
/// Numbers and booleans are converted into their textual form. Numbers are
/// formatted from their parsed value rather than copied from the source, so
/// `1e3` reads as `1000.0` and `0x10` as `16`.
///
/// # Errors
///
/// Errors if the field is a sequence or a mapping.
#[inline]
pub fn string_from(node: &Value, key: &str, default: &str) -> Result<String, Error> {
    match field(node, key) {
        Some(value) => String::from_yaml(value, key),
        None => Ok(default.to_owned()),
    }
}

/// Read a sequence of strings. Every item is trimmed.
///
/// # Errors
///
/// Errors if the field is present but isn't a sequence of scalars.
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let node: serde_yaml::Value = serde_yaml::from_str(r#"
/// tags: [ alpha , beta]
/// name: gamma
/// "#)?;
///
/// assert_eq!(yaml::string_list_from(&node, "tags", Vec::new())?, ["alpha", "beta"]);
/// assert!(yaml::string_list_from(&node, "name", Vec::new()).is_err());
/// # Ok::<_, anyhow::Error>(())
/// ```
#[inline]
pub fn string_list_from(
    node: &Value,
    key: &str,
    default: Vec<String>,
) -> Result<Vec<String>, Error> {
    read(node, key, default)
}

/// Read a sequence of strings, also accepting a comma-separated scalar.
///
/// A scalar is split on commas and [`StringList::needs_save`] is set, so
/// that the caller can rewrite the document with a proper sequence.
///
/// # Errors
///
/// Errors if the field is present but is neither a scalar nor a sequence of
/// scalars.
///
/// # Examples
///
/// ```
/// use yamlfields::yaml;
///
/// let node: serde_yaml::Value = serde_yaml::from_str(r#"
/// old: alpha, beta
/// new: [alpha, beta]
/// "#)?;
///
/// let old = yaml::lenient_string_list_from(&node, "old", Vec::new())?;
/// assert_eq!(old.items, ["alpha", "beta"]);
/// assert!(old.needs_save);
///
/// let new = yaml::lenient_string_list_from(&node, "new", Vec::new())?;
/// assert_eq!(new.items, ["alpha", "beta"]);
/// assert!(!new.needs_save);
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn lenient_string_list_from(
    node: &Value,
    key: &str,
    default: Vec<String>,
) -> Result<StringList, Error> {
    let Some(value) = field(node, key) else {
        return Ok(StringList {
            items: default,
            needs_save: false,
        });
    };

    if let Value::Sequence(..) = value {
        return Ok(StringList {
            items: Vec::from_yaml(value, key)?,
            needs_save: false,
        });
    }

    let Some(scalar) = scalar(value) else {
        return Err(Error::new(key, ErrorKind::ExpectedScalarOrSequence));
    };

    let scalar = scalar.trim();

    if scalar.is_empty() {
        return Ok(StringList::default());
    }

    log::debug!("Converting comma-separated node {key} into a list");

    Ok(StringList {
        items: scalar.split(',').map(|s| s.trim().to_owned()).collect(),
        needs_save: true,
    })
}

/// Read an ISO 8601 date such as `2023-05-01`.
///
/// # Errors
///
/// Errors if the field is present but isn't a date.
#[inline]
pub fn date_from(node: &Value, key: &str, default: NaiveDate) -> Result<NaiveDate, Error> {
    read(node, key, default)
}

/// Read an ISO 8601 date and time such as `2023-05-01T12:30:00Z`.
///
/// The time is converted into UTC. A time without an offset is taken to be
/// in UTC already.
///
/// # Errors
///
/// Errors if the field is present but isn't a date and time.
#[inline]
pub fn date_time_from(
    node: &Value,
    key: &str,
    default: DateTime<Utc>,
) -> Result<DateTime<Utc>, Error> {
    read(node, key, default)
}

/// Read an enumeration stored by name.
///
/// Names which don't match any variant fall back to `default`.
///
/// # Errors
///
/// Errors if the field is a sequence or a mapping.
///
/// # Examples
///
/// ```
/// use yamlfields::{named_enum, yaml};
///
/// named_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     enum Mode {
///         Fast,
///         Safe,
///     }
/// }
///
/// let node: serde_yaml::Value = serde_yaml::from_str(r#"
/// mode: Fast
/// other: Bogus
/// "#)?;
///
/// assert_eq!(yaml::enum_from(&node, "mode", Mode::Safe)?, Mode::Fast);
/// assert_eq!(yaml::enum_from(&node, "other", Mode::Safe)?, Mode::Safe);
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn enum_from<E>(node: &Value, key: &str, default: E) -> Result<E, Error>
where
    E: NamedEnum,
{
    let Some(value) = field(node, key) else {
        return Ok(default);
    };

    let text = scalar(value).ok_or_else(|| Error::new(key, ErrorKind::ExpectedScalar))?;
    Ok(enums::parse(text.trim()).unwrap_or(default))
}

/// Look up a field, treating `null` as missing.
fn field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match untag(untag(node).get(key)?) {
        Value::Null => None,
        value => Some(value),
    }
}

fn untag(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }

    value
}

/// The textual form of a scalar.
fn scalar(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(string) => Some(Cow::Borrowed(string.as_str())),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Bool(false) => Some(Cow::Borrowed("false")),
        _ => None,
    }
}

fn integer<T>(value: &Value, key: &str) -> Result<T, Error>
where
    T: TryFrom<u64> + TryFrom<i64> + lexical_core::FromLexical,
{
    match value {
        Value::Number(number) => {
            let converted = if let Some(n) = number.as_u64() {
                <T as TryFrom<u64>>::try_from(n).ok()
            } else if let Some(n) = number.as_i64() {
                <T as TryFrom<i64>>::try_from(n).ok()
            } else {
                return Err(Error::new(key, ErrorKind::ExpectedInteger));
            };

            converted.ok_or_else(|| Error::new(key, ErrorKind::IntegerOutOfRange))
        }
        Value::String(string) => lexical_core::parse(string.trim().as_bytes())
            .map_err(|_| Error::new(key, ErrorKind::ExpectedInteger)),
        _ => Err(Error::new(key, ErrorKind::ExpectedInteger)),
    }
}

/// Quantities are stored either as their canonical integer or as text. Any
/// other scalar goes through the text parser as well.
fn quantity(value: &Value, key: &str, parse: fn(&str) -> u64) -> Result<u64, Error> {
    if let Value::Number(number) = value {
        if let Some(n) = number.as_u64() {
            return Ok(n);
        }
    }

    let text = scalar(value).ok_or_else(|| Error::new(key, ErrorKind::ExpectedQuantity))?;
    Ok(parse(&text))
}

impl FromYaml for bool {
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        match value {
            Value::Bool(value) => Ok(*value),
            Value::String(string) => match string.as_str() {
                "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" | "y"
                | "Y" => Ok(true),
                "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" | "n"
                | "N" => Ok(false),
                _ => Err(Error::new(key, ErrorKind::ExpectedBool)),
            },
            _ => Err(Error::new(key, ErrorKind::ExpectedBool)),
        }
    }
}

impl FromYaml for i32 {
    #[inline]
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        integer(value, key)
    }
}

impl FromYaml for u64 {
    #[inline]
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        integer(value, key)
    }
}

impl FromYaml for String {
    #[inline]
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        let string = scalar(value).ok_or_else(|| Error::new(key, ErrorKind::ExpectedScalar))?;
        Ok(string.into_owned())
    }
}

impl FromYaml for Vec<String> {
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        let Value::Sequence(sequence) = value else {
            return Err(Error::new(key, ErrorKind::ExpectedSequence));
        };

        let mut items = Vec::with_capacity(sequence.len());

        for item in sequence {
            let item =
                scalar(untag(item)).ok_or_else(|| Error::new(key, ErrorKind::ExpectedScalar))?;
            items.push(item.trim().to_owned());
        }

        Ok(items)
    }
}

impl FromYaml for NaiveDate {
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        let Value::String(string) = value else {
            return Err(Error::new(key, ErrorKind::ExpectedDate));
        };

        NaiveDate::parse_from_str(string.trim(), "%Y-%m-%d")
            .map_err(|_| Error::new(key, ErrorKind::ExpectedDate))
    }
}

impl FromYaml for DateTime<Utc> {
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        let Value::String(string) = value else {
            return Err(Error::new(key, ErrorKind::ExpectedDateTime));
        };

        let string = string.trim();

        if let Ok(date_time) = DateTime::parse_from_rfc3339(string) {
            return Ok(date_time.with_timezone(&Utc));
        }

        let naive = NaiveDateTime::parse_from_str(string, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| Error::new(key, ErrorKind::ExpectedDateTime))?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}

impl FromYaml for FileSize {
    #[inline]
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        quantity(value, key, parse_file_size).map(FileSize::from_bytes)
    }
}

impl FromYaml for Duration {
    #[inline]
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        quantity(value, key, parse_duration).map(Duration::from_secs)
    }
}

impl<T> FromYaml for Option<T>
where
    T: FromYaml,
{
    #[inline]
    fn from_yaml(value: &Value, key: &str) -> Result<Self, Error> {
        T::from_yaml(value, key).map(Some)
    }
}
