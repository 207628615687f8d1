//! Calendar-year date sweeps.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Generates every date of a calendar year, January 1 through December 31.
///
/// The sweep has 365 entries for a common year and 366 for a leap year.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` cannot be represented
/// as a calendar date.
pub fn year_dates(year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
    let start =
        NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::YearOutOfRange { year })?;
    let mut dates = Vec::with_capacity(366);
    let mut current = start;
    while current.year() == year {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(dates)
}
