//! Relative date labels: "Today, 14:30", "Yesterday, 09:05", "03 Mar, 18:00".

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Which label family a timestamp falls into, relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateBucket {
    /// Same calendar day as the reference.
    Today,
    /// The calendar day before the reference.
    Yesterday,
    /// Anything else, including future days.
    Older,
}

impl DateBucket {
    /// Compares calendar dates only; time of day is ignored.
    #[must_use]
    pub fn classify(day: NaiveDate, today: NaiveDate) -> Self {
        if day == today {
            Self::Today
        } else if today.pred_opt() == Some(day) {
            Self::Yesterday
        } else {
            Self::Older
        }
    }
}

/// Labels a wall-clock time that is already in the display zone.
pub(crate) fn label_local(local: NaiveDateTime, today: NaiveDate) -> String {
    match DateBucket::classify(local.date(), today) {
        DateBucket::Today => format!("Today, {}", local.format("%H:%M")),
        DateBucket::Yesterday => format!("Yesterday, {}", local.format("%H:%M")),
        DateBucket::Older => local.format("%d %b, %H:%M").to_string(),
    }
}

/// Formats `date` relative to the reference instant `now`.
///
/// `date` is first expressed in `now`'s time zone, so both calendar days
/// come from the same zone.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use bankdash_core::datetime::format_date;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 12, 18, 0, 0).unwrap();
/// let earlier = Utc.with_ymd_and_hms(2024, 3, 12, 9, 5, 0).unwrap();
/// assert_eq!(format_date(&earlier, &now), "Today, 09:05");
///
/// let older = Utc.with_ymd_and_hms(2024, 3, 3, 18, 0, 0).unwrap();
/// assert_eq!(format_date(&older, &now), "03 Mar, 18:00");
/// ```
#[must_use]
pub fn format_date<Tz, Rz>(date: &DateTime<Tz>, now: &DateTime<Rz>) -> String
where
    Tz: TimeZone,
    Rz: TimeZone,
{
    let local = date.with_timezone(&now.timezone());
    label_local(local.naive_local(), now.date_naive())
}

/// Formats `date` against the current wall clock in the process local zone.
///
/// Each call reads the clock again; use a
/// [`RenderClock`](super::RenderClock) to label a whole list against one
/// instant.
#[must_use]
pub fn format_date_local<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format_date(date, &Local::now())
}
