//! Warming trend over yearly means.

use chrono::Datelike;
use isithot_stats::{LinearFit, linear_regression};
use tracing::warn;

use crate::series::DailySeries;

/// Mean temperature of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyMean {
    /// Calendar year.
    pub year: i32,
    /// Zero-based position of the year, counted from the first year of the
    /// series.
    pub index: usize,
    /// Mean of the defined daily values in that year.
    pub mean: f64,
}

/// Averages `series` per calendar year.
///
/// Every year between the first and last observation gets a slot; years
/// without a defined value are dropped afterwards, so they leave a gap in
/// `index` rather than shifting the later years.
pub fn yearly_means(series: &DailySeries) -> Vec<YearlyMean> {
    let (Some(first), Some(last)) = (series.first_year(), series.last_year()) else {
        return Vec::new();
    };

    let mut sums = vec![(0.0_f64, 0usize); (last - first + 1) as usize];
    for obs in series.iter().filter(|o| !o.temp_mean.is_nan()) {
        let slot = &mut sums[(obs.date.year() - first) as usize];
        slot.0 += obs.temp_mean;
        slot.1 += 1;
    }

    sums.into_iter()
        .enumerate()
        .filter(|(_, (_, n))| *n > 0)
        .map(|(index, (sum, n))| YearlyMean {
            year: first + index as i32,
            index,
            mean: sum / n as f64,
        })
        .collect()
}

/// Fits `mean = intercept + slope * index` over the yearly means.
///
/// Fewer than two years gives an undefined (all-`NaN`) fit.
pub fn fit_trend(means: &[YearlyMean]) -> LinearFit {
    let x: Vec<f64> = means.iter().map(|m| m.index as f64).collect();
    let y: Vec<f64> = means.iter().map(|m| m.mean).collect();
    let fit = linear_regression(&x, &y);
    if !fit.is_defined() {
        warn!(n_years = means.len(), "trend undefined, need at least two distinct years");
    }
    fit
}
