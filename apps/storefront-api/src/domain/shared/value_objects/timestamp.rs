//! Timestamp value object for temporal data.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp for pickup times and record creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the current timestamp.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse from an ISO 8601 / RFC 3339 string (timezone-aware).
    ///
    /// # Errors
    ///
    /// Returns error if the string is not a valid RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format as ISO 8601 / RFC 3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Shift forward by a duration.
    #[must_use]
    pub fn plus(&self, duration: Duration) -> Self {
        Self(self.0 + duration)
    }

    /// Calculate duration since another timestamp.
    #[must_use]
    pub fn duration_since(&self, other: Self) -> Duration {
        self.0 - other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_parse() {
        let ts = Timestamp::parse("2026-06-01T12:00:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-06-01T12:00:00+00:00");
    }

    #[test]
    fn timestamp_parse_preserves_instant_across_offsets() {
        let toronto = Timestamp::parse("2026-06-01T08:00:00-04:00").unwrap();
        let utc = Timestamp::parse("2026-06-01T12:00:00Z").unwrap();
        assert_eq!(toronto, utc);
    }

    #[test]
    fn timestamp_parse_invalid() {
        assert!(Timestamp::parse("not-a-date").is_err());
    }

    #[test]
    fn timestamp_plus_and_ordering() {
        let ts = Timestamp::parse("2026-06-01T12:00:00Z").unwrap();
        let later = ts.plus(Duration::hours(72));
        assert!(later > ts);
        assert_eq!(later.duration_since(ts), Duration::hours(72));
    }

    #[test]
    fn timestamp_display_is_rfc3339() {
        let ts = Timestamp::parse("2026-06-01T12:00:00Z").unwrap();
        assert_eq!(format!("{ts}"), "2026-06-01T12:00:00+00:00");
    }
}
