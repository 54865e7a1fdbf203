//! # isithot-climatology
//!
//! Answers "is today's temperature unusual?" for one station by ranking
//! today's reading within the historical distribution for the same time of
//! year.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────┐     ┌────────────────────┐
//!  │ DataProvider │────▶│ DailySeries /    │────▶│ ReferenceDistrib.  │──┐
//!  │ (raw rows)   │     │ SubDailySeries   │     │ trends, calendar   │  │
//!  └──────────────┘     └──────────────────┘     └────────────────────┘  │
//!                                │                                      ▼
//!                                └──────▶ CurrentReading ──────▶ PlotData ──▶ yes_no / avg_compare
//! ```
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use isithot_climatology::{
//!     ClimatologyConfig, DailySeries, RawDailyRow, SubDailySeries, build_plot_data,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let rows: Vec<RawDailyRow> = (2000..2024)
//!     .map(|y| RawDailyRow::new(NaiveDate::from_ymd_opt(y, 6, 1).unwrap(), 15.0 + (y - 2000) as f64 * 0.1))
//!     .collect();
//! let daily = DailySeries::from_rows(&rows).unwrap();
//!
//! let data = build_plot_data(daily, SubDailySeries::empty(), today, &ClimatologyConfig::new()).unwrap();
//! assert!(data.current_avg().is_nan());
//! assert_eq!(data.yes_no().to_string(), "not sure, we have no data yet");
//! assert!(data.trend_overall().slope > 0.0);
//! ```

mod config;
mod error;
mod grid;
mod narrative;
mod pipeline;
mod plot_data;
mod provider;
mod reading;
mod reference;
mod series;
mod trend;

pub use config::ClimatologyConfig;
pub use error::{ClimatologyError, ProviderError};
pub use grid::{CalendarDay, CalendarGrid, CalendarRow, build_calendar};
pub use narrative::{AvgCompare, HotWarm, PercentileBand, YesNo, avg_compare, hot_warm, yes_no};
pub use pipeline::{build_plot_data, prepare_calendar, prepare_data};
pub use plot_data::PlotData;
pub use provider::{ColumnMapping, DataProvider, Station};
pub use reading::{CurrentReading, ReadingPolicy};
pub use reference::ReferenceDistribution;
pub use series::{DailyObservation, DailySeries, RawDailyRow, SubDailyReading, SubDailySeries};
pub use trend::{YearlyMean, fit_trend, yearly_means};
pub use isithot_stats::LinearFit;
