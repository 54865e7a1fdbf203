//! JSON output structures for pipeline results.
//!
//! Undefined numbers (`NaN`) are written as `null`. The full daily history
//! is summarised by its row count; the derived products are written in
//! full.

use chrono::NaiveDate;
use isithot_climatology::{CalendarGrid, DailySeries, LinearFit, PlotData, Station, YearlyMean};
use serde::Serialize;

use crate::error::IoError;

/// Top-level report for one station and date.
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub station: StationOutput,
    pub date: NaiveDate,
    pub current: CurrentOutput,
    pub percentile: Option<f64>,
    pub answer: AnswerOutput,
    pub reference: ReferenceOutput,
    pub trend_overall: TrendOutput,
    pub trend_month: TrendOutput,
    pub calendar: CalendarOutput,
    /// `[temperature, density]` pairs.
    pub density: Vec<[f64; 2]>,
    pub n_daily: usize,
    pub n_now: usize,
}

/// Station metadata.
#[derive(Debug, Clone, Serialize)]
pub struct StationOutput {
    pub id: String,
    pub name: String,
    pub min_year: i32,
}

/// Today's reading.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentOutput {
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub n_readings: usize,
}

/// Narrative answer, as stable keys plus English text.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutput {
    pub yes_no_key: &'static str,
    pub yes_no: String,
    pub avg_compare_key: &'static str,
    pub avg_compare: String,
    pub hot_warm: &'static str,
}

/// The time-of-year reference distribution.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceOutput {
    pub q5: Option<f64>,
    pub median: Option<f64>,
    pub q95: Option<f64>,
    pub n_days: usize,
    pub n_defined: usize,
    /// First and last year with data.
    pub period: Option<[i32; 2]>,
    pub days: Vec<DayValue>,
}

/// One daily mean.
#[derive(Debug, Clone, Serialize)]
pub struct DayValue {
    pub date: NaiveDate,
    pub temp_mean: Option<f64>,
}

/// A fitted trend and the yearly means it was fitted to.
#[derive(Debug, Clone, Serialize)]
pub struct TrendOutput {
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub per_century: Option<f64>,
    pub points: Vec<YearPoint>,
}

/// One yearly mean.
#[derive(Debug, Clone, Serialize)]
pub struct YearPoint {
    pub year: i32,
    pub index: usize,
    pub mean: f64,
}

/// Calendar grid of percentiles.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarOutput {
    pub year: i32,
    pub n_filled: usize,
    pub rows: Vec<CalendarRowOutput>,
}

/// One month of the calendar.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarRowOutput {
    pub month: u32,
    pub label: &'static str,
    /// 31 cells; `null` for missing data and nonexistent dates.
    pub cells: Vec<Option<f64>>,
}

fn defined(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

impl From<&Station> for StationOutput {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
            min_year: station.min_year,
        }
    }
}

impl TrendOutput {
    fn new(fit: LinearFit, points: &[YearlyMean]) -> Self {
        Self {
            slope: defined(fit.slope),
            intercept: defined(fit.intercept),
            per_century: defined(fit.per_century()),
            points: points
                .iter()
                .map(|p| YearPoint {
                    year: p.year,
                    index: p.index,
                    mean: p.mean,
                })
                .collect(),
        }
    }
}

impl From<&CalendarGrid> for CalendarOutput {
    fn from(grid: &CalendarGrid) -> Self {
        Self {
            year: grid.year(),
            n_filled: grid.n_filled(),
            rows: grid
                .rows()
                .iter()
                .map(|row| CalendarRowOutput {
                    month: row.month,
                    label: row.label,
                    cells: row.cells.to_vec(),
                })
                .collect(),
        }
    }
}

fn day_values(series: &DailySeries) -> Vec<DayValue> {
    series
        .iter()
        .map(|obs| DayValue {
            date: obs.date,
            temp_mean: defined(obs.temp_mean),
        })
        .collect()
}

impl ReportOutput {
    /// Collects the presentable parts of a pipeline result.
    pub fn new(station: &Station, data: &PlotData) -> Self {
        let current = data.current();
        let reference = data.reference();
        let yes_no = data.yes_no();
        let avg_compare = data.avg_compare();

        Self {
            station: station.into(),
            date: data.current_date(),
            current: CurrentOutput {
                value: defined(current.value),
                min: defined(current.min),
                max: defined(current.max),
                n_readings: current.n_readings,
            },
            percentile: defined(data.current_avg_percentile()),
            answer: AnswerOutput {
                yes_no_key: yes_no.key(),
                yes_no: yes_no.to_string(),
                avg_compare_key: avg_compare.key(),
                avg_compare: avg_compare.to_string(),
                hot_warm: data.hot_warm().key(),
            },
            reference: ReferenceOutput {
                q5: defined(data.q5()),
                median: defined(data.median()),
                q95: defined(data.q95()),
                n_days: reference.subset().len(),
                n_defined: reference.n_defined(),
                period: data.reference_period().map(|(a, b)| [a, b]),
                days: day_values(data.toy_data()),
            },
            trend_overall: TrendOutput::new(data.trend_overall(), data.trend_overall_data()),
            trend_month: TrendOutput::new(data.trend_month(), data.trend_month_data()),
            calendar: data.calendar().into(),
            density: data
                .density_curve()
                .into_iter()
                .map(|(x, y)| [x, y])
                .collect(),
            n_daily: data.daily().len(),
            n_now: data.now().len(),
        }
    }
}

/// Standalone calendar for one station and year.
#[derive(Debug, Serialize)]
pub struct CalendarReport {
    pub station: StationOutput,
    pub calendar: CalendarOutput,
}

/// Serialize a pipeline result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if serialisation fails.
pub fn to_json(station: &Station, data: &PlotData) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(&ReportOutput::new(station, data))?)
}

/// Serialize a calendar grid to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if serialisation fails.
pub fn calendar_to_json(station: &Station, grid: &CalendarGrid) -> Result<String, IoError> {
    let report = CalendarReport {
        station: station.into(),
        calendar: grid.into(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
