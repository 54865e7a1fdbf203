//! Time-of-year reference distribution.

use chrono::{Datelike, NaiveDate};
use isithot_calendar::ToyWindow;
use isithot_stats::{median, percentile_of_score, quantile};

use crate::config::ClimatologyConfig;
use crate::series::DailySeries;

/// Historical daily means at the same time of year as an anchor date.
///
/// Only years strictly before the anchor's year contribute, so the current
/// year never leaks into its own baseline. `NaN` means are kept in the
/// subset and ignored by the statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDistribution {
    window: ToyWindow,
    subset: DailySeries,
    values: Vec<f64>,
}

impl ReferenceDistribution {
    /// Selects the reference subset of `daily` for `anchor`.
    pub fn build(daily: &DailySeries, anchor: NaiveDate, config: &ClimatologyConfig) -> Self {
        let window = ToyWindow::around(
            anchor,
            config.window_half_width_days(),
            config.window_points(),
        );
        Self::from_window(daily, window)
    }

    /// Selects the reference subset of `daily` for a prebuilt `window`.
    pub fn from_window(daily: &DailySeries, window: ToyWindow) -> Self {
        let subset = daily
            .before_year(window.anchor().year())
            .in_window(&window);
        let values = subset.values();
        Self {
            window,
            subset,
            values,
        }
    }

    /// Returns the time-of-year window.
    pub fn window(&self) -> &ToyWindow {
        &self.window
    }

    /// Returns the selected observations.
    pub fn subset(&self) -> &DailySeries {
        &self.subset
    }

    /// Returns the selected means, `NaN` included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of defined values.
    pub fn n_defined(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    /// Percentile rank of `value` within the distribution.
    pub fn percentile_of(&self, value: f64) -> f64 {
        percentile_of_score(&self.values, value)
    }

    /// Linear-interpolated quantile `q` of the distribution.
    pub fn quantile(&self, q: f64) -> f64 {
        quantile(&self.values, q)
    }

    /// Median of the distribution.
    pub fn median(&self) -> f64 {
        median(&self.values)
    }

    /// First and last year with a defined value.
    pub fn period(&self) -> Option<(i32, i32)> {
        let mut years = self
            .subset
            .iter()
            .filter(|o| !o.temp_mean.is_nan())
            .map(|o| o.date.year());
        let first = years.next()?;
        let last = years.last().unwrap_or(first);
        Some((first, last))
    }
}
