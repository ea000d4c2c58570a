//! Serde support for quantities.
//!
//! Quantities serialize as their canonical integer. When deserializing,
//! either the integer or the human readable string is accepted.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use super::{parse_duration, parse_file_size, Duration, FileSize};

/// A quantity which can be built from a canonical integer or parsed text.
trait Quantity: Sized {
    const EXPECTING: &'static str;

    fn from_canonical(value: u64) -> Self;

    fn parse(text: &str) -> Self;
}

impl Quantity for Duration {
    const EXPECTING: &'static str = "a number of seconds or a duration like `1h 5m`";

    #[inline]
    fn from_canonical(value: u64) -> Self {
        Duration::from_secs(value)
    }

    #[inline]
    fn parse(text: &str) -> Self {
        Duration::from_secs(parse_duration(text))
    }
}

impl Quantity for FileSize {
    const EXPECTING: &'static str = "a number of bytes or a size like `2.50 MB`";

    #[inline]
    fn from_canonical(value: u64) -> Self {
        FileSize::from_bytes(value)
    }

    #[inline]
    fn parse(text: &str) -> Self {
        FileSize::from_bytes(parse_file_size(text))
    }
}

struct QuantityVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for QuantityVisitor<T>
where
    T: Quantity,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::EXPECTING)
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(T::from_canonical(value))
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match u64::try_from(value) {
            Ok(value) => Ok(T::from_canonical(value)),
            Err(..) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }

    #[inline]
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(T::parse(value))
    }
}

impl Serialize for Duration {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.get())
    }
}

impl<'de> Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor(PhantomData))
    }
}

impl Serialize for FileSize {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.get())
    }
}

impl<'de> Deserialize<'de> for FileSize {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor(PhantomData))
    }
}
