//! Calendar-date helpers shared by the directory server and the console host.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::warn;

use crate::error::{validation_error, SlotbookError};

/// Wire and input format of a booking date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, SlotbookError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| validation_error(format!("Invalid date '{}' (expected YYYY-MM-DD)", input)))
}

/// Resolves an IANA zone name, falling back to Europe/Zurich.
pub fn resolve_time_zone(name: &str) -> Tz {
    Tz::from_str(name).unwrap_or_else(|_| {
        warn!("Unknown time zone '{}', using Europe/Zurich", name);
        Tz::Europe__Zurich
    })
}

/// Today's calendar date in the given zone.
pub fn today_in(time_zone: &str) -> NaiveDate {
    Utc::now()
        .with_timezone(&resolve_time_zone(time_zone))
        .date_naive()
}

/// Whether `date` lies before today in the given zone.
pub fn is_past(date: NaiveDate, time_zone: &str) -> bool {
    date < today_in(time_zone)
}
