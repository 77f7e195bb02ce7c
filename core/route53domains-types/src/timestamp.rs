//! Wire-level timestamps.
//!
//! The service exchanges dates as fractional seconds since the Unix epoch.
//! [`Timestamp`] keeps millisecond precision, which is all the service
//! emits, so equality and hashing are exact.

use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A UTC instant with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTimestamp` if the value is outside chrono's range.
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| Error::InvalidTimestamp(format!("{millis} ms out of range")))
    }

    /// Creates a timestamp from (fractional) seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTimestamp` for non-finite or out-of-range input.
    pub fn from_epoch_seconds(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(Error::InvalidTimestamp(format!("{seconds} is not finite")));
        }
        let millis = (seconds * 1000.0).round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return Err(Error::InvalidTimestamp(format!("{seconds} s out of range")));
        }
        Self::from_epoch_millis(millis as i64)
    }

    /// Parses an RFC 3339 string such as `2024-05-01T12:00:00Z`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTimestamp` if the string is not RFC 3339.
    pub fn parse_rfc3339(s: &str) -> Result<Self> {
        let parsed = DateTime::parse_from_rfc3339(s)
            .map_err(|e| Error::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Self::from_epoch_millis(parsed.timestamp_millis())
    }

    /// Returns the current time truncated to milliseconds.
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        DateTime::from_timestamp_millis(now.timestamp_millis()).map_or(Self(now), Self)
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Seconds since the Unix epoch, with the millisecond part as a fraction.
    #[must_use]
    pub fn epoch_seconds(&self) -> f64 {
        self.epoch_millis() as f64 / 1000.0
    }

    /// Returns the underlying chrono value.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        DateTime::from_timestamp_millis(value.timestamp_millis()).map_or(Self(value), Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let millis = self.epoch_millis();
        if millis % 1000 == 0 {
            serializer.serialize_i64(millis / 1000)
        } else {
            serializer.serialize_f64(self.epoch_seconds())
        }
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or an RFC 3339 string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Timestamp, E> {
        let millis = v
            .checked_mul(1000)
            .ok_or_else(|| E::custom(format!("{v} s out of range")))?;
        Timestamp::from_epoch_millis(millis).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Timestamp, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("{v} s out of range")))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Timestamp, E> {
        Timestamp::from_epoch_seconds(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Timestamp, E> {
        Timestamp::parse_rfc3339(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
