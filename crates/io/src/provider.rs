//! File-backed data provider.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use isithot_climatology::{ColumnMapping, DataProvider, RawDailyRow, Station, SubDailyReading};
use tracing::{debug, info};

use crate::csv_read;
use crate::error::IoError;
use crate::parquet_read;
use crate::table::{ColumnTable, TableRequest};

// ---------------------------------------------------------------------------
// DataFormat
// ---------------------------------------------------------------------------

/// On-disk format of a station's data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// Apache Parquet.
    Parquet,
}

impl DataFormat {
    /// Guesses the format from a file extension (`.parquet`/`.pq` or
    /// `.csv`, case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "parquet" | "pq" => Some(Self::Parquet),
            _ => None,
        }
    }

    fn read(self, path: &Path, request: &TableRequest<'_>) -> Result<ColumnTable, IoError> {
        match self {
            Self::Csv => csv_read::read_csv(path, request),
            Self::Parquet => parquet_read::read_parquet(path, request),
        }
    }
}

// ---------------------------------------------------------------------------
// FileProvider
// ---------------------------------------------------------------------------

/// Serves one station's daily history and sub-daily readings from two
/// files.
///
/// Rows are returned sorted by time regardless of file order. Files are
/// re-read on every call; nothing is cached.
///
/// # Example
///
/// ```no_run
/// use isithot_climatology::{ClimatologyConfig, Station, prepare_data};
/// use isithot_io::FileProvider;
/// use chrono::NaiveDate;
///
/// let provider = FileProvider::new(
///     Station::new("lmss", "Münster", 2010),
///     "data/lmss_daily.csv",
///     "data/lmss_now.csv",
/// );
/// let date = NaiveDate::from_ymd_opt(2024, 7, 18).unwrap();
/// let data = prepare_data(&provider, date, &ClimatologyConfig::default()).unwrap();
/// println!("{}", data.avg_compare());
/// ```
#[derive(Debug, Clone)]
pub struct FileProvider {
    station: Station,
    columns: ColumnMapping,
    format: DataFormat,
    daily_path: PathBuf,
    current_path: PathBuf,
}

impl FileProvider {
    /// Creates a provider with default column names. The format is taken
    /// from the daily file's extension and falls back to CSV.
    pub fn new(
        station: Station,
        daily_path: impl Into<PathBuf>,
        current_path: impl Into<PathBuf>,
    ) -> Self {
        let daily_path = daily_path.into();
        let format = DataFormat::from_path(&daily_path).unwrap_or_default();
        Self {
            station,
            columns: ColumnMapping::default(),
            format,
            daily_path,
            current_path: current_path.into(),
        }
    }

    /// Set the file format for both files.
    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the column names.
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }

    /// Returns the file format.
    pub fn format(&self) -> DataFormat {
        self.format
    }

    /// Returns the daily history file.
    pub fn daily_path(&self) -> &Path {
        &self.daily_path
    }

    /// Returns the sub-daily readings file.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    fn day_of_year(&self, raw: f64, row: usize) -> Result<Option<u16>, IoError> {
        if raw.is_nan() {
            return Ok(None);
        }
        if raw.fract() != 0.0 || !(1.0..=366.0).contains(&raw) {
            return Err(IoError::InvalidValue {
                path: self.daily_path.clone(),
                column: self.columns.day_of_year.clone(),
                row,
                value: raw.to_string(),
            });
        }
        Ok(Some(raw as u16))
    }
}

/// Looks up a column the reader was asked for. Absent only when the request
/// marked it optional.
fn values<'t>(table: &'t ColumnTable, name: &str, path: &Path) -> Result<&'t [f64], IoError> {
    table.column(name).ok_or_else(|| IoError::MissingColumn {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

impl DataProvider for FileProvider {
    type Error = IoError;

    fn station(&self) -> &Station {
        &self.station
    }

    fn column_mapping(&self) -> &ColumnMapping {
        &self.columns
    }

    #[tracing::instrument(skip_all, fields(station = %self.station.id, %date))]
    fn daily_data(&self, date: NaiveDate) -> Result<Vec<RawDailyRow>, IoError> {
        let request = TableRequest {
            datetime: &self.columns.datetime,
            required: vec![self.columns.temp_mean.as_str()],
            optional: vec![self.columns.day_of_year.as_str()],
        };
        let table = self.format.read(&self.daily_path, &request)?;
        let temp_mean = values(&table, &self.columns.temp_mean, &self.daily_path)?;
        let doy = table.column(&self.columns.day_of_year);

        let mut rows = Vec::with_capacity(table.datetimes.len());
        for i in table.sorted_order() {
            let day_of_year = match doy {
                Some(doy) => self.day_of_year(doy[i], i)?,
                None => None,
            };
            rows.push(RawDailyRow {
                datetime: table.datetimes[i],
                temp_mean: temp_mean[i],
                day_of_year,
            });
        }

        info!(rows = rows.len(), "daily history loaded");
        Ok(rows)
    }

    #[tracing::instrument(skip_all, fields(station = %self.station.id, %date))]
    fn current_data(&self, date: NaiveDate) -> Result<Vec<SubDailyReading>, IoError> {
        let request = TableRequest {
            datetime: &self.columns.datetime,
            required: vec![self.columns.temp_max.as_str(), self.columns.temp_min.as_str()],
            optional: vec![self.columns.temp_mean.as_str()],
        };
        let table = self.format.read(&self.current_path, &request)?;
        let temp_max = values(&table, &self.columns.temp_max, &self.current_path)?;
        let temp_min = values(&table, &self.columns.temp_min, &self.current_path)?;
        let temp_mean = table.column(&self.columns.temp_mean);

        let start = date.and_time(NaiveTime::MIN);
        let end = date.succ_opt().map(|next| next.and_time(NaiveTime::MIN));

        let readings: Vec<SubDailyReading> = table
            .sorted_order()
            .into_iter()
            .filter(|&i| {
                let ts = table.datetimes[i];
                ts >= start && end.is_none_or(|end| ts < end)
            })
            .map(|i| SubDailyReading {
                timestamp: table.datetimes[i],
                temp_max: temp_max[i],
                temp_min: temp_min[i],
                temp_mean: temp_mean.map_or(f64::NAN, |m| m[i]),
            })
            .collect();

        debug!(
            total = table.datetimes.len(),
            today = readings.len(),
            "sub-daily readings loaded"
        );
        Ok(readings)
    }
}
