//! Error types for the isithot-climatology crate.

use chrono::NaiveDateTime;

/// Boxed error returned by a [`DataProvider`](crate::DataProvider).
pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for all fallible operations in the isithot-climatology crate.
///
/// Missing data is not an error here: empty distributions, an empty
/// sub-daily window and short trend series all propagate as `NaN`. The
/// variants below cover malformed input series, invalid configuration,
/// rejected anchor years and upstream provider faults.
#[derive(Debug, thiserror::Error)]
pub enum ClimatologyError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a series is not strictly ordered by time.
    #[error("{series} series: timestamp {timestamp} at row {row} does not follow the previous row")]
    UnorderedTimestamps {
        /// Which series was being normalised (`"daily"` or `"sub-daily"`).
        series: &'static str,
        /// 0-based row index of the offending row.
        row: usize,
        /// Timestamp of the offending row.
        timestamp: NaiveDateTime,
    },

    /// Returned when a provider-supplied day-of-year is out of range or
    /// disagrees with the row's date.
    #[error("daily series: invalid day of year {doy} at row {row} ({date})")]
    InvalidDayOfYear {
        /// 0-based row index of the offending row.
        row: usize,
        /// The day-of-year supplied by the provider.
        doy: u16,
        /// The row's date.
        date: chrono::NaiveDate,
    },

    /// Returned when a requested year lies outside the station's record.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// First year with data.
        min: i32,
        /// Last year that may be requested.
        max: i32,
    },

    /// An upstream data provider failed; the source error is kept unchanged.
    #[error("data provider failed: {0}")]
    Provider(#[source] ProviderError),

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] isithot_calendar::CalendarError),
}

impl ClimatologyError {
    /// Wraps a provider error.
    pub fn provider<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Provider(Box::new(err))
    }
}
