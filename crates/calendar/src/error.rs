//! Error types for the isithot-calendar crate.

/// Error type for all fallible operations in the isithot-calendar crate.
///
/// This enum covers validation failures for day-of-year values, month
/// numbers and calendar years in the proleptic Gregorian calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=366.
    #[error("invalid day of year: {doy} (must be 1..=366)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year cannot be represented by the date library.
    #[error("year {year} is out of the supported date range")]
    InvalidYear {
        /// The year that could not be represented.
        year: i32,
    },
}
