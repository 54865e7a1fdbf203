//! Data provider capability, column mapping and station metadata.

use chrono::{Datelike, NaiveDate};

use crate::error::ClimatologyError;
use crate::series::{RawDailyRow, SubDailyReading};

/// Maps a provider's native field names onto the logical fields the
/// pipeline needs.
///
/// The pipeline itself never looks at these names; concrete providers use
/// them to locate columns in their storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub datetime: String,
    pub temp_mean: String,
    pub temp_max: String,
    pub temp_min: String,
    pub day_of_year: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            datetime: "date".to_string(),
            temp_mean: "temp_mean".to_string(),
            temp_max: "temp_max".to_string(),
            temp_min: "temp_min".to_string(),
            day_of_year: "doy".to_string(),
        }
    }
}

/// A weather station served by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique identifier, used in links and on the command line.
    pub id: String,
    /// Display name.
    pub name: String,
    /// First year with data.
    pub min_year: i32,
}

impl Station {
    /// Creates station metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, min_year: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_year,
        }
    }

    /// Checks that `year` lies between the station's first year and the
    /// year of `today`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::YearOutOfRange`] otherwise.
    pub fn check_year(&self, year: i32, today: NaiveDate) -> Result<(), ClimatologyError> {
        let max = today.year();
        if year < self.min_year || year > max {
            return Err(ClimatologyError::YearOutOfRange {
                year,
                min: self.min_year,
                max,
            });
        }
        Ok(())
    }
}

/// A source of daily and sub-daily observations for one station.
///
/// Implementations do the I/O (database queries, file reads, caching); the
/// pipeline only shapes what they return. Errors are passed through to the
/// caller unchanged inside [`ClimatologyError::Provider`].
pub trait DataProvider {
    /// Error produced by the provider.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Station served by this provider.
    fn station(&self) -> &Station;

    /// Column names used by this provider.
    fn column_mapping(&self) -> &ColumnMapping;

    /// Daily mean temperatures, ascending by date. `date` may be used as a
    /// cache key.
    fn daily_data(&self, date: NaiveDate) -> Result<Vec<RawDailyRow>, Self::Error>;

    /// Sub-daily readings, ascending by timestamp. Readings before local
    /// midnight of `date` may be included; the pipeline discards them.
    fn current_data(&self, date: NaiveDate) -> Result<Vec<SubDailyReading>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_mapping() {
        let m = ColumnMapping::default();
        assert_eq!(m.datetime, "date");
        assert_eq!(m.day_of_year, "doy");
    }

    #[test]
    fn check_year_bounds() {
        let station = Station::new("lmss", "LMSS", 2010);
        let today = date(2024, 8, 1);
        assert!(station.check_year(2010, today).is_ok());
        assert!(station.check_year(2024, today).is_ok());
        assert!(matches!(
            station.check_year(2009, today),
            Err(ClimatologyError::YearOutOfRange {
                year: 2009,
                min: 2010,
                max: 2024
            })
        ));
        assert!(station.check_year(2025, today).is_err());
    }
}
