//! Low-level Parquet reading and column extraction.

use std::collections::BTreeMap;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray, RecordBatch};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, SchemaRef, TimeUnit, TimestampMicrosecondType};
use chrono::{DateTime, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::debug;

use crate::error::IoError;
use crate::table::{ColumnTable, TableRequest, parse_datetime};

/// Reads the schema and all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;
    Ok((schema, batches))
}

/// Reads the requested columns of a Parquet file.
///
/// The datetime column may be a string, `Date32`, `Date64` or any
/// timestamp; timestamps with a time zone are read as UTC wall time.
/// Numeric columns of any width are widened to `f64` and nulls become NaN.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] / [`IoError::Parquet`] from [`read_batches`].
/// - [`IoError::MissingColumn`] if the datetime or a required column is
///   absent from the schema.
/// - [`IoError::UnsupportedType`] for columns of a type that cannot be read.
/// - [`IoError::InvalidValue`] for null or unparseable datetimes.
pub(crate) fn read_parquet(
    path: &Path,
    request: &TableRequest<'_>,
) -> Result<ColumnTable, IoError> {
    let (schema, batches) = read_batches(path)?;
    let has = |name: &str| schema.column_with_name(name).is_some();
    let missing = |name: &str| IoError::MissingColumn {
        name: name.to_string(),
        path: path.to_path_buf(),
    };

    if !has(request.datetime) {
        return Err(missing(request.datetime));
    }
    let mut columns: Vec<&str> = Vec::new();
    for &name in &request.required {
        if !has(name) {
            return Err(missing(name));
        }
        columns.push(name);
    }
    columns.extend(request.optional.iter().copied().filter(|name| has(name)));

    let mut table = ColumnTable {
        datetimes: Vec::new(),
        numeric: columns
            .iter()
            .map(|name| (name.to_string(), Vec::new()))
            .collect::<BTreeMap<_, _>>(),
    };

    for batch in &batches {
        let offset = table.datetimes.len();
        let datetime_col = column(batch, request.datetime, path)?;
        extract_datetimes(datetime_col, request.datetime, path, offset, &mut table.datetimes)?;

        for &name in &columns {
            let values = extract_numeric(column(batch, name, path)?, name)?;
            if let Some(target) = table.numeric.get_mut(name) {
                target.extend(values);
            }
        }
    }

    debug!(
        path = %path.display(),
        batches = batches.len(),
        rows = table.datetimes.len(),
        "read parquet"
    );
    Ok(table)
}

fn column<'b>(batch: &'b RecordBatch, name: &str, path: &Path) -> Result<&'b ArrayRef, IoError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

fn extract_datetimes(
    array: &ArrayRef,
    name: &str,
    path: &Path,
    offset: usize,
    out: &mut Vec<NaiveDateTime>,
) -> Result<(), IoError> {
    let invalid = |row: usize, value: &str| IoError::InvalidValue {
        path: path.to_path_buf(),
        column: name.to_string(),
        row: offset + row,
        value: value.to_string(),
    };

    match array.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => {
            let strings = cast(array, &DataType::Utf8)?;
            let strings = strings.as_string::<i32>();
            for row in 0..strings.len() {
                if strings.is_null(row) {
                    return Err(invalid(row, "null"));
                }
                let raw = strings.value(row);
                out.push(parse_datetime(raw).ok_or_else(|| invalid(row, raw))?);
            }
        }
        DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => {
            let micros = cast(array, &DataType::Timestamp(TimeUnit::Microsecond, None))?;
            let micros = micros.as_primitive::<TimestampMicrosecondType>();
            for row in 0..micros.len() {
                if micros.is_null(row) {
                    return Err(invalid(row, "null"));
                }
                let value = micros.value(row);
                let dt = DateTime::from_timestamp_micros(value)
                    .ok_or_else(|| invalid(row, &value.to_string()))?;
                out.push(dt.naive_utc());
            }
        }
        other => {
            return Err(IoError::UnsupportedType {
                column: name.to_string(),
                data_type: other.to_string(),
            });
        }
    }
    Ok(())
}

fn extract_numeric(array: &ArrayRef, name: &str) -> Result<Vec<f64>, IoError> {
    if !array.data_type().is_numeric() {
        return Err(IoError::UnsupportedType {
            column: name.to_string(),
            data_type: array.data_type().to_string(),
        });
    }
    let floats = cast(array, &DataType::Float64)?;
    let floats = floats.as_primitive::<Float64Type>();
    Ok((0..floats.len())
        .map(|i| {
            if floats.is_null(i) {
                f64::NAN
            } else {
                floats.value(i)
            }
        })
        .collect())
}
