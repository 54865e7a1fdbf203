//! # isithot-io
//!
//! Read station observations from CSV or Parquet files and write pipeline
//! results as JSON. Bridges on-disk formats into the
//! [`DataProvider`](isithot_climatology::DataProvider) capability the
//! climatology pipeline consumes.
//!
//! ```text
//! daily.csv / daily.parquet ──┐
//!                             ├─► FileProvider ─► prepare_data ─► PlotData ─► to_json
//! now.csv   / now.parquet   ──┘
//! ```
//!
//! Column names are taken from a
//! [`ColumnMapping`](isithot_climatology::ColumnMapping). Missing cells
//! (`""`, `NA`, `NaN`, `null`, or Parquet nulls) become `NaN`.

mod csv_read;
mod error;
mod output;
mod parquet_read;
mod provider;
mod table;

pub use error::IoError;
pub use output::{
    AnswerOutput, CalendarOutput, CalendarReport, CalendarRowOutput, CurrentOutput, DayValue,
    ReferenceOutput, ReportOutput, StationOutput, TrendOutput, YearPoint, calendar_to_json,
    to_json,
};
pub use provider::{DataFormat, FileProvider};
