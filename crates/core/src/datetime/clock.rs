//! Display time zone and per-render reference clock.

use std::str::FromStr;

use bankdash_shared::types::TemporalPoint;
use bankdash_shared::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;

use super::label::{DateBucket, label_local};

/// Zone in which calendar days and times are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayTimeZone {
    /// Zone of the running process.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A named IANA zone.
    Named(Tz),
}

impl DisplayTimeZone {
    /// Parses a configured zone name. `None` means the process local zone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` for names chrono-tz does not know.
    pub fn parse(name: Option<&str>) -> AppResult<Self> {
        match name.map(str::trim) {
            None | Some("") => Ok(Self::Local),
            Some(n) if n.eq_ignore_ascii_case("utc") => Ok(Self::Utc),
            Some(n) => Tz::from_str(n)
                .map(Self::Named)
                .map_err(|e| AppError::Configuration(format!("Unknown time zone '{n}': {e}"))),
        }
    }

    /// Expresses an instant as wall-clock time in this zone.
    #[must_use]
    pub fn localize(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => at.with_timezone(&Local).fixed_offset(),
            Self::Utc => at.fixed_offset(),
            Self::Named(tz) => at.with_timezone(tz).fixed_offset(),
        }
    }
}

/// A "now" captured once per rendering pass.
///
/// Every label produced by one clock is relative to the same instant, so a
/// list rendered across midnight never mixes "Today" and "Yesterday" for
/// the same day.
#[derive(Debug, Clone, Copy)]
pub struct RenderClock {
    zone: DisplayTimeZone,
    now: DateTime<Utc>,
}

impl RenderClock {
    /// Captures the current wall clock.
    #[must_use]
    pub fn capture(zone: DisplayTimeZone) -> Self {
        Self::at(zone, Utc::now())
    }

    /// Uses a fixed reference instant.
    #[must_use]
    pub const fn at(zone: DisplayTimeZone, now: DateTime<Utc>) -> Self {
        Self { zone, now }
    }

    /// The captured reference instant.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// The display zone.
    #[must_use]
    pub const fn zone(&self) -> DisplayTimeZone {
        self.zone
    }

    /// Returns which bucket `point` falls into.
    #[must_use]
    pub fn bucket(&self, point: &TemporalPoint) -> DateBucket {
        let today = self.zone.localize(self.now).date_naive();
        DateBucket::classify(self.zone.localize(point.as_utc()).date_naive(), today)
    }

    /// Formats `point` relative to the captured instant.
    #[must_use]
    pub fn format(&self, point: &TemporalPoint) -> String {
        let today = self.zone.localize(self.now).date_naive();
        label_local(self.zone.localize(point.as_utc()).naive_local(), today)
    }
}
