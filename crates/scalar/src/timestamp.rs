//! Timestamp scalar
//!
//! Immutable wrapper over a timezone-less date and time. Every operation
//! returns a new value.

use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use datakind_error::{DataError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format used for display and serialization
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().naive_utc())
    }

    pub fn from_datetime(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Seconds since the Unix epoch, read as UTC
    pub fn from_unix(seconds: i64) -> Result<Self> {
        DateTime::from_timestamp(seconds, 0)
            .map(|dt| Self(dt.naive_utc()))
            .ok_or_else(|| DataError::invalid_argument("seconds", format!("{seconds} is out of range")))
    }

    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD`
    pub fn from_string(value: &str) -> Result<Self> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(dt.naive_utc()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
            return Ok(Self(dt));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| DataError::invalid_argument("timestamp", format!("cannot parse '{value}'")))
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }

    pub fn unix(&self) -> i64 {
        self.0.and_utc().timestamp()
    }

    /// Render with a strftime pattern; fails on unknown or timezone specifiers
    pub fn format(&self, pattern: &str) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", self.0.format(pattern))
            .map_err(|_| DataError::invalid_argument("pattern", format!("cannot format with '{pattern}'")))?;
        Ok(out)
    }

    pub fn add_seconds(&self, seconds: i64) -> Result<Self> {
        self.shift(TimeDelta::try_seconds(seconds), "seconds", seconds)
    }

    pub fn add_days(&self, days: i64) -> Result<Self> {
        self.shift(TimeDelta::try_days(days), "days", days)
    }

    fn shift(&self, delta: Option<TimeDelta>, unit: &str, amount: i64) -> Result<Self> {
        delta
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or_else(|| DataError::overflow(format!("add {unit}"), amount))
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// `self - other` in whole seconds
    pub fn diff_seconds(&self, other: &Self) -> i64 {
        (self.0 - other.0).num_seconds()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_string(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_supported_formats() {
        let a = Timestamp::from_string("2024-03-01 10:20:30").unwrap();
        let b = Timestamp::from_string("2024-03-01T10:20:30Z").unwrap();
        let c = Timestamp::from_string("2024-03-01T12:20:30+02:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(
            Timestamp::from_string("2024-03-01").unwrap().to_string(),
            "2024-03-01 00:00:00"
        );
        assert!(Timestamp::from_string("yesterday").is_err());
    }

    #[test]
    fn test_arithmetic_returns_new_value() {
        let start = Timestamp::from_string("2024-02-28 23:59:59").unwrap();
        let later = start.add_seconds(1).unwrap().add_days(1).unwrap();
        assert_eq!(later.to_string(), "2024-03-01 00:00:00");
        assert_eq!(start.to_string(), "2024-02-28 23:59:59");
        assert!(start.is_before(&later));
        assert!(later.is_after(&start));
        assert_eq!(later.diff_seconds(&start), 86_401);
    }

    #[test]
    fn test_unix_round_trip() {
        let ts = Timestamp::from_unix(0).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00");
        assert_eq!(ts.unix(), 0);
    }

    #[test]
    fn test_format_pattern() {
        let ts = Timestamp::from_string("2024-03-01 10:20:30").unwrap();
        assert_eq!(ts.format("%d/%m/%Y").unwrap(), "01/03/2024");
        assert!(ts.format("%Q").is_err());
    }

    #[test]
    fn test_serde() {
        let ts = Timestamp::from_string("2024-03-01 10:20:30").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-03-01 10:20:30\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
