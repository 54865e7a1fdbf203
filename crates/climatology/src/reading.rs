//! Reduction of today's sub-daily readings to one value.

use chrono::{NaiveDate, NaiveTime};
use isithot_stats::{nan_max, nan_mean, nan_min};
use tracing::debug;

use crate::series::SubDailySeries;

/// How the readings since midnight are reduced to a single temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingPolicy {
    /// Average of the lowest minimum and the highest maximum.
    #[default]
    MinMaxAverage,
    /// Arithmetic mean of the representative temperature.
    Mean,
}

/// Today's temperature summarised from sub-daily readings.
///
/// All values are `NaN` when there are no readings since midnight yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentReading {
    /// The representative value under the configured policy.
    pub value: f64,
    /// Lowest minimum since midnight.
    pub min: f64,
    /// Highest maximum since midnight.
    pub max: f64,
    /// Number of readings since midnight.
    pub n_readings: usize,
}

impl CurrentReading {
    /// A reading with no data.
    pub fn missing() -> Self {
        Self {
            value: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            n_readings: 0,
        }
    }

    /// Aggregates the readings at or after local midnight of `date`.
    pub fn aggregate(now: &SubDailySeries, date: NaiveDate, policy: ReadingPolicy) -> Self {
        let today = now.since(date.and_time(NaiveTime::MIN));
        if today.is_empty() {
            debug!(%date, "no sub-daily readings since midnight");
            return Self::missing();
        }

        let minima: Vec<f64> = today.iter().map(|r| r.temp_min).collect();
        let maxima: Vec<f64> = today.iter().map(|r| r.temp_max).collect();
        let min = nan_min(&minima);
        let max = nan_max(&maxima);
        let value = match policy {
            ReadingPolicy::MinMaxAverage => (max + min) / 2.0,
            ReadingPolicy::Mean => {
                let means: Vec<f64> = today.iter().map(|r| r.temp_mean).collect();
                nan_mean(&means)
            }
        };

        debug!(%date, n = today.len(), value, min, max, ?policy, "aggregated current reading");
        Self {
            value,
            min,
            max,
            n_readings: today.len(),
        }
    }

    /// Returns `true` if the representative value is defined.
    pub fn is_available(&self) -> bool {
        !self.value.is_nan()
    }
}
