//! Timestamps attached to transactions.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A validated point in time, stored in UTC.
///
/// Invalid input is rejected here, at construction, so date formatting
/// never has an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemporalPoint(DateTime<Utc>);

impl TemporalPoint {
    /// Wraps an already valid timestamp.
    #[must_use]
    pub fn new<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self(at.with_timezone(&Utc))
    }

    /// Parses an RFC 3339 timestamp such as `2024-03-12T14:30:00+01:00`.
    pub fn parse_rfc3339(input: &str) -> AppResult<Self> {
        DateTime::parse_from_rfc3339(input)
            .map(|at| Self::new(&at))
            .map_err(|e| AppError::Validation(format!("Invalid timestamp '{input}': {e}")))
    }

    /// Builds a point from milliseconds since the Unix epoch.
    pub fn from_timestamp_millis(millis: i64) -> AppResult<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| AppError::Validation(format!("Timestamp {millis}ms is out of range")))
    }

    /// Returns the instant in UTC.
    #[must_use]
    pub const fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for TemporalPoint {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let point = TemporalPoint::parse_rfc3339("2024-03-12T14:30:00+01:00").unwrap();
        assert_eq!(point.as_utc().hour(), 13);
        assert_eq!(point.as_utc().minute(), 30);
    }

    #[test]
    fn test_parse_rfc3339_rejects_garbage() {
        let err = TemporalPoint::parse_rfc3339("yesterday-ish").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_from_timestamp_millis() {
        let point = TemporalPoint::from_timestamp_millis(0).unwrap();
        assert_eq!(point.as_utc(), DateTime::<Utc>::UNIX_EPOCH);
        assert!(TemporalPoint::from_timestamp_millis(i64::MAX).is_err());
    }
}
