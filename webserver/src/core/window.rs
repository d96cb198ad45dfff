//! Trailing-year window arithmetic
//!
//! Windows are anchored on the latest date present in the data, never on the
//! wall clock.

use chrono::{Months, NaiveDate};
use shared::{DATE_FORMAT, QueryDate};

use crate::error::{WebServerError, WebServerResult};

/// Calendar months covered by a trailing window
pub const TRAILING_MONTHS: u32 = 12;

/// Date twelve calendar months before `latest`.
///
/// Month subtraction clamps to the end of the target month, so a latest date
/// of 2016-02-29 yields 2015-02-28.
pub fn trailing_year_cutoff(latest: NaiveDate) -> NaiveDate {
    latest
        .checked_sub_months(Months::new(TRAILING_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse a date read back from the `measurement` table
pub fn parse_stored_date(value: &str) -> WebServerResult<NaiveDate> {
    value
        .parse::<QueryDate>()
        .map(|date| date.as_naive())
        .map_err(|_| WebServerError::CorruptDate { value: value.to_string() })
}

/// Cutoff for the window ending at a stored `latest` date, formatted for
/// comparison against the TEXT `date` column
pub fn cutoff_for_stored(latest: &str) -> WebServerResult<String> {
    let latest = parse_stored_date(latest)?;
    Ok(trailing_year_cutoff(latest).format(DATE_FORMAT).to_string())
}
