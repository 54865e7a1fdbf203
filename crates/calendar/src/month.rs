//! Month labels and lengths.

use crate::error::CalendarError;
use crate::sequence::is_leap_year;

/// Short English month names, index 0 = January.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Longest possible month, in days.
pub const MAX_DAYS_IN_MONTH: usize = 31;

/// Number of days in each month of a non-leap year (index 0 unused).
const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the short name (`"Jan"` .. `"Dec"`) of `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_abbreviation(month: u32) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_ABBREVIATIONS[(month - 1) as usize])
}

/// Returns the number of days of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations() {
        assert_eq!(month_abbreviation(1).unwrap(), "Jan");
        assert_eq!(month_abbreviation(12).unwrap(), "Dec");
        assert_eq!(
            month_abbreviation(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    }

    #[test]
    fn totals_match_year_length() {
        for year in [1900, 2000, 2023, 2024] {
            let total: u32 = (1..=12).map(|m| days_in_month(year, m).unwrap()).sum();
            assert_eq!(total, u32::from(crate::sequence::days_in_year(year)));
        }
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            days_in_month(2023, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn no_month_exceeds_max() {
        for m in 1..=12 {
            assert!(days_in_month(2024, m).unwrap() as usize <= MAX_DAYS_IN_MONTH);
        }
    }
}
