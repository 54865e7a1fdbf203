//! Calendar grid of historical percentiles.
//!
//! Every day of one year is ranked against its own time-of-year window, then
//! the year is pivoted into twelve month rows of 31 day columns. Days without
//! data and dates that do not exist (Feb 30, Apr 31, ...) are empty cells.

use chrono::{Datelike, NaiveDate};
use isithot_calendar::{MAX_DAYS_IN_MONTH, ToyWindow, month_abbreviation, year_dates};
use isithot_stats::percentile_of_score;
use tracing::debug;

use crate::config::ClimatologyConfig;
use crate::error::ClimatologyError;
use crate::series::DailySeries;

/// One day of the calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDay {
    /// Calendar date.
    pub date: NaiveDate,
    /// Daily mean temperature; `NaN` when missing.
    pub temp_mean: f64,
    /// Percentile of `temp_mean` within the day's own reference
    /// distribution; `NaN` when undefined.
    pub percentile: f64,
}

/// One month of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarRow {
    /// Month number (1..=12).
    pub month: u32,
    /// Short month name (`"Jan"`..`"Dec"`).
    pub label: &'static str,
    /// Percentile per day of month; index 0 is the 1st.
    pub cells: [Option<f64>; MAX_DAYS_IN_MONTH],
}

/// Month by day-of-month grid of percentiles for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    year: i32,
    days: Vec<CalendarDay>,
    rows: Vec<CalendarRow>,
}

impl CalendarGrid {
    /// Creates an all-empty grid for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::Calendar`] if `year` cannot be represented.
    pub fn empty(year: i32) -> Result<Self, ClimatologyError> {
        let days = year_dates(year)?
            .into_iter()
            .map(|date| CalendarDay {
                date,
                temp_mean: f64::NAN,
                percentile: f64::NAN,
            })
            .collect();
        let rows = (1..=12)
            .map(|month| -> Result<CalendarRow, ClimatologyError> {
                Ok(CalendarRow {
                    month,
                    label: month_abbreviation(month)?,
                    cells: [None; MAX_DAYS_IN_MONTH],
                })
            })
            .collect::<Result<Vec<_>, ClimatologyError>>()?;
        Ok(Self { year, days, rows })
    }

    /// Returns the grid's year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns every day of the year in order (365 or 366 entries).
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns the twelve month rows.
    pub fn rows(&self) -> &[CalendarRow] {
        &self.rows
    }

    /// Returns the percentile for `month`/`day`, `None` for empty cells.
    pub fn cell(&self, month: u32, day: u32) -> Option<f64> {
        let row = self.rows.get(month.checked_sub(1)? as usize)?;
        *row.cells.get(day.checked_sub(1)? as usize)?
    }

    /// Number of non-empty cells.
    pub fn n_filled(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    fn set(&mut self, date: NaiveDate, temp_mean: f64, percentile: f64) {
        if date.year() != self.year {
            return;
        }
        let day = &mut self.days[date.ordinal0() as usize];
        day.temp_mean = temp_mean;
        day.percentile = percentile;
        let row = &mut self.rows[date.month0() as usize];
        row.cells[date.day0() as usize] = (!percentile.is_nan()).then_some(percentile);
    }
}

/// Builds the calendar grid for the year of `anchor`.
///
/// Each recorded day of that year is ranked against the daily means of
/// earlier years that fall in its own time-of-year window (missing means
/// removed). When `current` is given, a synthetic entry for `anchor` with
/// that value replaces or adds the anchor day. `daily` is never modified.
pub fn build_calendar(
    daily: &DailySeries,
    anchor: NaiveDate,
    current: Option<f64>,
    config: &ClimatologyConfig,
) -> Result<CalendarGrid, ClimatologyError> {
    let year = anchor.year();
    let history = daily.before_year(year).dropna();

    let mut entries: Vec<(NaiveDate, f64)> = daily
        .in_year(year)
        .iter()
        .map(|o| (o.date, o.temp_mean))
        .collect();
    if let Some(value) = current {
        match entries.binary_search_by_key(&anchor, |e| e.0) {
            Ok(i) => entries[i].1 = value,
            Err(i) => entries.insert(i, (anchor, value)),
        }
    }

    let mut grid = CalendarGrid::empty(year)?;
    for (date, value) in entries {
        let window = ToyWindow::around(
            date,
            config.window_half_width_days(),
            config.window_points(),
        );
        let reference = history.in_window(&window).values();
        grid.set(date, value, percentile_of_score(&reference, value));
    }

    debug!(
        year,
        n_history = history.len(),
        n_filled = grid.n_filled(),
        "built calendar grid"
    );
    Ok(grid)
}
