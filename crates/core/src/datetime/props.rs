//! Property-based tests for date labels.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;

use super::label::format_date;

/// Reference instants between 2000 and 2037.
fn reference_now() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..2_114_380_800i64)
        .prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap_or_default())
}

/// Seconds into a day.
fn time_of_day() -> impl Strategy<Value = u32> {
    0u32..86_400
}

fn on_day(now: DateTime<Utc>, days_back: i64, secs: u32) -> DateTime<Utc> {
    let day = now.date_naive() - Duration::days(days_back);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default();
    Utc.from_utc_datetime(&day.and_time(time))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any time on the reference day is labelled "Today".
    #[test]
    fn prop_same_day_is_today(now in reference_now(), secs in time_of_day()) {
        let label = format_date(&on_day(now, 0, secs), &now);
        prop_assert!(label.starts_with("Today, "), "got {}", label);
    }

    /// Any time on the previous day is labelled "Yesterday".
    #[test]
    fn prop_previous_day_is_yesterday(now in reference_now(), secs in time_of_day()) {
        let label = format_date(&on_day(now, 1, secs), &now);
        prop_assert!(label.starts_with("Yesterday, "), "got {}", label);
    }

    /// Two or more days back starts with a two-digit day number.
    #[test]
    fn prop_older_is_absolute(
        now in reference_now(),
        days_back in 2i64..3_650,
        secs in time_of_day(),
    ) {
        let date = on_day(now, days_back, secs);
        let label = format_date(&date, &now);
        let day = date.format("%d").to_string();
        prop_assert!(label.starts_with(&day), "got {}", label);
        prop_assert_eq!(label.len(), "01 Jan, 00:00".len());
    }

    /// The time part is always HH:MM.
    #[test]
    fn prop_time_suffix(
        now in reference_now(),
        days_back in 0i64..10,
        secs in time_of_day(),
    ) {
        let date = on_day(now, days_back, secs);
        let label = format_date(&date, &now);
        let expected = date.format("%H:%M").to_string();
        prop_assert!(label.ends_with(&expected), "got {}", label);
    }
}
