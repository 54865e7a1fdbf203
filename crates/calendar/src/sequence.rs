//! Date sequence generation for whole calendar years.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Generates every date of `year`, from January 1 to December 31.
///
/// Produces 365 dates, or 366 in a leap year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` cannot be represented.
pub fn year_dates(year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::InvalidYear { year })?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CalendarError::InvalidYear { year })?;
    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
