//! Daily and sub-daily observation series.
//!
//! Providers hand over raw rows; [`DailySeries::from_rows`] and
//! [`SubDailySeries::from_rows`] check ordering, attach the day-of-year and
//! produce the canonical, immutable series the pipeline works on. Every
//! filtering method returns a new series and leaves `self` untouched.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use isithot_calendar::{Doy, ToyWindow};

use crate::error::ClimatologyError;

/// One raw daily row as supplied by a data provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDailyRow {
    /// Date (and possibly time) of the observation.
    pub datetime: NaiveDateTime,
    /// Daily mean temperature; `NaN` when missing.
    pub temp_mean: f64,
    /// Day-of-year, when the provider stores one.
    pub day_of_year: Option<u16>,
}

impl RawDailyRow {
    /// Creates a row for `date` at midnight without a stored day-of-year.
    pub fn new(date: NaiveDate, temp_mean: f64) -> Self {
        Self {
            datetime: date.and_time(chrono::NaiveTime::MIN),
            temp_mean,
            day_of_year: None,
        }
    }
}

/// One normalised daily observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyObservation {
    /// Calendar date.
    pub date: NaiveDate,
    /// Daily mean temperature; `NaN` when missing.
    pub temp_mean: f64,
    /// Day-of-year of `date`.
    pub day_of_year: Doy,
}

/// Date-ordered daily mean temperatures with day-of-year attached.
///
/// Dates are unique and strictly increasing. Rows with a missing mean are
/// retained; use [`DailySeries::dropna`] where they must be excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    observations: Vec<DailyObservation>,
}

impl DailySeries {
    /// Normalises raw provider rows.
    ///
    /// The day-of-year is taken from the row when supplied and derived from
    /// the date otherwise.
    ///
    /// # Errors
    ///
    /// - [`ClimatologyError::UnorderedTimestamps`] if two rows share a date or
    ///   a date does not follow its predecessor.
    /// - [`ClimatologyError::InvalidDayOfYear`] if a supplied day-of-year is
    ///   outside 1..=366 or disagrees with the row's date.
    pub fn from_rows(rows: &[RawDailyRow]) -> Result<Self, ClimatologyError> {
        let mut observations: Vec<DailyObservation> = Vec::with_capacity(rows.len());
        for (row, raw) in rows.iter().enumerate() {
            let date = raw.datetime.date();
            if let Some(prev) = observations.last()
                && prev.date >= date
            {
                return Err(ClimatologyError::UnorderedTimestamps {
                    series: "daily",
                    row,
                    timestamp: raw.datetime,
                });
            }
            let day_of_year = match raw.day_of_year {
                Some(doy) => {
                    let supplied = Doy::new(doy).map_err(|_| ClimatologyError::InvalidDayOfYear {
                        row,
                        doy,
                        date,
                    })?;
                    if supplied != Doy::of(date) {
                        return Err(ClimatologyError::InvalidDayOfYear { row, doy, date });
                    }
                    supplied
                }
                None => Doy::of(date),
            };
            observations.push(DailyObservation {
                date,
                temp_mean: raw.temp_mean,
                day_of_year,
            });
        }
        Ok(Self { observations })
    }

    /// Returns an empty series.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the observations in date order.
    pub fn observations(&self) -> &[DailyObservation] {
        &self.observations
    }

    /// Iterates over the observations in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyObservation> {
        self.observations.iter()
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Looks up the observation for `date`.
    pub fn get(&self, date: NaiveDate) -> Option<&DailyObservation> {
        self.observations
            .binary_search_by_key(&date, |o| o.date)
            .ok()
            .map(|i| &self.observations[i])
    }

    /// Returns the mean temperatures in date order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.temp_mean).collect()
    }

    /// Returns the year of the first observation.
    pub fn first_year(&self) -> Option<i32> {
        self.observations.first().map(|o| o.date.year())
    }

    /// Returns the year of the last observation.
    pub fn last_year(&self) -> Option<i32> {
        self.observations.last().map(|o| o.date.year())
    }

    /// Returns a copy without the observations whose mean is `NaN`.
    pub fn dropna(&self) -> Self {
        self.filter(|o| !o.temp_mean.is_nan())
    }

    /// Returns a copy restricted to years strictly before `year`.
    pub fn before_year(&self, year: i32) -> Self {
        self.filter(|o| o.date.year() < year)
    }

    /// Returns a copy restricted to the calendar year `year`.
    pub fn in_year(&self, year: i32) -> Self {
        self.filter(|o| o.date.year() == year)
    }

    /// Returns a copy restricted to the days of `window`.
    pub fn in_window(&self, window: &ToyWindow) -> Self {
        self.filter(|o| window.contains(o.day_of_year))
    }

    fn filter(&self, keep: impl Fn(&DailyObservation) -> bool) -> Self {
        Self {
            observations: self.observations.iter().copied().filter(|o| keep(o)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DailySeries {
    type Item = &'a DailyObservation;
    type IntoIter = std::slice::Iter<'a, DailyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// One sub-daily ("now") reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubDailyReading {
    /// Time of the reading.
    pub timestamp: NaiveDateTime,
    /// Maximum temperature over the reading interval; `NaN` when missing.
    pub temp_max: f64,
    /// Minimum temperature over the reading interval; `NaN` when missing.
    pub temp_min: f64,
    /// Representative temperature of the interval; `NaN` when missing.
    pub temp_mean: f64,
}

/// Time-ordered high-resolution readings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubDailySeries {
    readings: Vec<SubDailyReading>,
}

impl SubDailySeries {
    /// Normalises raw provider readings.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::UnorderedTimestamps`] if the timestamps are
    /// not strictly increasing.
    pub fn from_rows(rows: &[SubDailyReading]) -> Result<Self, ClimatologyError> {
        if let Some(row) = rows
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(ClimatologyError::UnorderedTimestamps {
                series: "sub-daily",
                row: row + 1,
                timestamp: rows[row + 1].timestamp,
            });
        }
        Ok(Self {
            readings: rows.to_vec(),
        })
    }

    /// Returns an empty series.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the readings in time order.
    pub fn readings(&self) -> &[SubDailyReading] {
        &self.readings
    }

    /// Returns the number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns `true` if there are no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Returns the readings at or after `start`.
    pub fn since(&self, start: NaiveDateTime) -> &[SubDailyReading] {
        let first = self.readings.partition_point(|r| r.timestamp < start);
        &self.readings[first..]
    }
}
