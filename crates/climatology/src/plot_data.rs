//! The immutable result of one pipeline run.

use chrono::NaiveDate;
use isithot_stats::{GaussianKde, LinearFit, linspace, nan_max, nan_min};

use crate::grid::CalendarGrid;
use crate::narrative::{self, AvgCompare, HotWarm, YesNo};
use crate::reading::CurrentReading;
use crate::reference::ReferenceDistribution;
use crate::series::{DailySeries, SubDailySeries};
use crate::trend::YearlyMean;

/// Everything presentation needs to answer "is it hot today?".
///
/// Built once by [`build_plot_data`](crate::build_plot_data) or
/// [`prepare_data`](crate::prepare_data) and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub(crate) current_date: NaiveDate,
    pub(crate) daily: DailySeries,
    pub(crate) now: SubDailySeries,
    pub(crate) reference: ReferenceDistribution,
    pub(crate) trend_overall_data: Vec<YearlyMean>,
    pub(crate) trend_month_data: Vec<YearlyMean>,
    pub(crate) calendar: CalendarGrid,
    pub(crate) trend_overall: LinearFit,
    pub(crate) trend_month: LinearFit,
    pub(crate) current: CurrentReading,
    pub(crate) current_avg_percentile: f64,
    pub(crate) q5: f64,
    pub(crate) median: f64,
    pub(crate) q95: f64,
    pub(crate) hot_threshold: f64,
    pub(crate) density_points: usize,
}

impl PlotData {
    /// The anchor date.
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// The full daily history.
    pub fn daily(&self) -> &DailySeries {
        &self.daily
    }

    /// The sub-daily readings as supplied by the provider.
    pub fn now(&self) -> &SubDailySeries {
        &self.now
    }

    /// Daily means of earlier years at the same time of year.
    pub fn toy_data(&self) -> &DailySeries {
        self.reference.subset()
    }

    /// The time-of-year reference distribution.
    pub fn reference(&self) -> &ReferenceDistribution {
        &self.reference
    }

    /// Yearly means of the full history.
    pub fn trend_overall_data(&self) -> &[YearlyMean] {
        &self.trend_overall_data
    }

    /// Yearly means of the time-of-year subset.
    pub fn trend_month_data(&self) -> &[YearlyMean] {
        &self.trend_month_data
    }

    /// Percentile calendar for the anchor year.
    pub fn calendar(&self) -> &CalendarGrid {
        &self.calendar
    }

    /// Trend fit over the full history.
    pub fn trend_overall(&self) -> LinearFit {
        self.trend_overall
    }

    /// Trend fit over the time-of-year subset.
    pub fn trend_month(&self) -> LinearFit {
        self.trend_month
    }

    /// Today's reading.
    pub fn current(&self) -> CurrentReading {
        self.current
    }

    /// Today's representative temperature; `NaN` without data.
    pub fn current_avg(&self) -> f64 {
        self.current.value
    }

    /// Percentile of today's temperature in the time-of-year distribution.
    pub fn current_avg_percentile(&self) -> f64 {
        self.current_avg_percentile
    }

    /// 5th percentile of the time-of-year distribution.
    pub fn q5(&self) -> f64 {
        self.q5
    }

    /// Median of the time-of-year distribution.
    pub fn median(&self) -> f64 {
        self.median
    }

    /// 95th percentile of the time-of-year distribution.
    pub fn q95(&self) -> f64 {
        self.q95
    }

    /// Short answer category.
    pub fn yes_no(&self) -> YesNo {
        narrative::yes_no(self.current_avg_percentile)
    }

    /// Comparison-with-average category.
    pub fn avg_compare(&self) -> AvgCompare {
        narrative::avg_compare(
            self.current_avg_percentile,
            self.current.value,
            self.hot_threshold,
        )
    }

    /// Hot/warm qualifier for today.
    pub fn hot_warm(&self) -> HotWarm {
        narrative::hot_warm(self.current.value, self.hot_threshold)
    }

    /// First and last year with a defined value in the time-of-year data.
    pub fn reference_period(&self) -> Option<(i32, i32)> {
        self.reference.period()
    }

    /// Kernel density estimate of the time-of-year distribution as
    /// `(temperature, density)` pairs.
    ///
    /// The curve spans one degree beyond the data on both sides, widened to
    /// include today's reading. Empty when fewer than two distinct values
    /// are available.
    pub fn density_curve(&self) -> Vec<(f64, f64)> {
        let values = self.reference.values();
        let Some(kde) = GaussianKde::new(values) else {
            return Vec::new();
        };
        let mut lo = nan_min(values);
        let mut hi = nan_max(values);
        let today = self.current.value;
        if today < lo {
            lo = today;
        } else if today > hi {
            hi = today;
        }
        linspace(lo - 1.0, hi + 1.0, self.density_points)
            .into_iter()
            .map(|x| (x, kde.evaluate(x)))
            .collect()
    }
}
