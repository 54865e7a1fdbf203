//! CSV reading into a [`ColumnTable`].

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::IoError;
use crate::table::{ColumnTable, TableRequest, parse_datetime, parse_number};

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> IoError + '_ {
    move |e| IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// Reads the requested columns of a CSV file with a header row.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::MissingColumn`] if the datetime or a required column is
///   absent from the header.
/// - [`IoError::InvalidValue`] for unparseable datetimes or numbers.
/// - [`IoError::Csv`] for malformed CSV.
pub(crate) fn read_csv(path: &Path, request: &TableRequest<'_>) -> Result<ColumnTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error(path))?;
    let headers = reader.headers().map_err(csv_error(path))?.clone();
    let index_of = |name: &str| headers.iter().position(|h| h == name);
    let missing = |name: &str| IoError::MissingColumn {
        name: name.to_string(),
        path: path.to_path_buf(),
    };

    let datetime_idx = index_of(request.datetime).ok_or_else(|| missing(request.datetime))?;
    let mut columns: Vec<(&str, usize)> = Vec::new();
    for &name in &request.required {
        columns.push((name, index_of(name).ok_or_else(|| missing(name))?));
    }
    for &name in &request.optional {
        if let Some(idx) = index_of(name) {
            columns.push((name, idx));
        }
    }

    let mut table = ColumnTable {
        datetimes: Vec::new(),
        numeric: columns
            .iter()
            .map(|(name, _)| (name.to_string(), Vec::new()))
            .collect::<BTreeMap<_, _>>(),
    };

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error(path))?;
        let invalid = |column: &str, value: &str| IoError::InvalidValue {
            path: path.to_path_buf(),
            column: column.to_string(),
            row,
            value: value.to_string(),
        };

        let raw = record.get(datetime_idx).unwrap_or_default();
        let datetime = parse_datetime(raw).ok_or_else(|| invalid(request.datetime, raw))?;
        table.datetimes.push(datetime);

        for &(name, idx) in &columns {
            let raw = record.get(idx).unwrap_or_default();
            let value = parse_number(raw).ok_or_else(|| invalid(name, raw))?;
            if let Some(values) = table.numeric.get_mut(name) {
                values.push(value);
            }
        }
    }

    debug!(
        path = %path.display(),
        rows = table.datetimes.len(),
        columns = columns.len(),
        "read csv"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn request<'a>() -> TableRequest<'a> {
        TableRequest {
            datetime: "date",
            required: vec!["temp_mean"],
            optional: vec!["doy"],
        }
    }

    #[test]
    fn reads_required_and_optional_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "daily.csv",
            "date,temp_mean,doy,other\n2024-01-01,1.5,1,x\n2024-01-02,NA,2,y\n",
        );
        let table = read_csv(&path, &request()).unwrap();
        assert_eq!(table.datetimes.len(), 2);
        let temp = table.column("temp_mean").unwrap();
        assert_eq!(temp[0], 1.5);
        assert!(temp[1].is_nan());
        assert_eq!(table.column("doy").unwrap(), &[1.0, 2.0]);
        assert!(table.column("other").is_none());
    }

    #[test]
    fn optional_column_may_be_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "daily.csv", "date,temp_mean\n2024-01-01,1.5\n");
        let table = read_csv(&path, &request()).unwrap();
        assert!(table.column("doy").is_none());
    }

    #[test]
    fn missing_required_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "daily.csv", "date,tmean\n2024-01-01,1.5\n");
        match read_csv(&path, &request()).unwrap_err() {
            IoError::MissingColumn { name, .. } => assert_eq!(name, "temp_mean"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn invalid_datetime_reports_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "daily.csv",
            "date,temp_mean\n2024-01-01,1.5\nsoon,2.0\n",
        );
        match read_csv(&path, &request()).unwrap_err() {
            IoError::InvalidValue {
                column, row, value, ..
            } => {
                assert_eq!(column, "date");
                assert_eq!(row, 1);
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn invalid_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "daily.csv", "date,temp_mean\n2024-01-01,warm\n");
        assert!(matches!(
            read_csv(&path, &request()),
            Err(IoError::InvalidValue { .. })
        ));
    }

    #[test]
    fn file_not_found() {
        let result = read_csv(Path::new("/nonexistent/daily.csv"), &request());
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
