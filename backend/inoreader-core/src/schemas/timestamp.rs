//! Lenient integer and epoch timestamp decoding.
//!
//! Inoreader sends some numbers as JSON integers and others as numeric
//! strings, sometimes for the same field across endpoints. Both forms are
//! accepted here. Epoch values are seconds and convert to UTC.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserializer;
use serde::de::{Error, Unexpected, Visitor};

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a numeric string")
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<i64, E> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// Integer sent either as a number or as a numeric string.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor)
}

/// Epoch seconds, as a number or numeric string, converted to UTC.
pub fn epoch_seconds<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = deserializer.deserialize_any(IntegerVisitor)?;
    from_epoch_seconds(seconds).ok_or_else(|| {
        D::Error::invalid_value(
            Unexpected::Signed(seconds),
            &"epoch seconds within the datetime range",
        )
    })
}

pub fn from_epoch_seconds(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

/// Parses a millisecond string such as `crawlTimeMsec`.
pub fn parse_epoch_millis(value: &str) -> Option<DateTime<Utc>> {
    value.trim().parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}

/// Parses a microsecond string such as `timestampUsec`.
pub fn parse_epoch_micros(value: &str) -> Option<DateTime<Utc>> {
    value.trim().parse::<i64>().ok().and_then(DateTime::from_timestamp_micros)
}
