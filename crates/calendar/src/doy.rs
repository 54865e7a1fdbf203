//! Day-of-year newtype for the Gregorian calendar.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Day-of-year in the Gregorian calendar (1..=366).
///
/// Day 366 only exists in leap years. Values are not tied to a particular
/// year, so the same `Doy` names "Mar 1" in a non-leap year and "Feb 29" in
/// a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=366).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Returns the day-of-year of a calendar date.
    pub fn of(date: NaiveDate) -> Self {
        // chrono guarantees ordinal() in 1..=366
        Self(date.ordinal() as u16)
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=365).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Resolves this day-of-year to a date in `year`.
    ///
    /// Returns `None` for day 366 of a non-leap year.
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(year, u32::from(self.0))
    }
}

impl From<Doy> for u16 {
    fn from(doy: Doy) -> Self {
        doy.0
    }
}
