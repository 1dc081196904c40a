//! Relative and absolute date-time labels for transaction lists.

pub mod clock;
pub mod label;

#[cfg(test)]
mod props;

pub use clock::{DisplayTimeZone, RenderClock};
pub use label::{DateBucket, format_date, format_date_local};
