//! Column table shared by the CSV and Parquet readers.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Cell contents treated as a missing value.
const MISSING_TOKENS: [&str; 6] = ["", "NA", "NaN", "nan", "null", "NULL"];

/// Datetime layouts accepted in text columns, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Columns a reader must extract from a file.
#[derive(Debug, Clone)]
pub(crate) struct TableRequest<'a> {
    /// Datetime column.
    pub datetime: &'a str,
    /// Numeric columns that must be present.
    pub required: Vec<&'a str>,
    /// Numeric columns read when present.
    pub optional: Vec<&'a str>,
}

/// A datetime column plus named numeric columns of equal length.
#[derive(Debug, Clone, Default)]
pub(crate) struct ColumnTable {
    pub datetimes: Vec<NaiveDateTime>,
    pub numeric: BTreeMap<String, Vec<f64>>,
}

impl ColumnTable {
    /// Returns the named numeric column, if it was read.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.numeric.get(name).map(Vec::as_slice)
    }

    /// Row indices ordered by datetime; ties keep file order.
    pub fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.datetimes.len()).collect();
        order.sort_by_key(|&i| self.datetimes[i]);
        order
    }
}

/// Parses a date or datetime in one of the supported layouts.
///
/// Plain dates resolve to midnight. RFC 3339 values keep their local wall
/// time and drop the offset.
pub(crate) fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_local())
}

/// Parses a numeric cell. Missing tokens give `Some(NaN)`; anything else
/// that is not a number gives `None`.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if MISSING_TOKENS.contains(&raw) {
        return Some(f64::NAN);
    }
    raw.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn datetime_layouts() {
        assert_eq!(parse_datetime("2024-05-10"), Some(dt(2024, 5, 10, 0, 0, 0)));
        assert_eq!(
            parse_datetime("2024-05-10 13:45"),
            Some(dt(2024, 5, 10, 13, 45, 0))
        );
        assert_eq!(
            parse_datetime("2024-05-10 13:45:30"),
            Some(dt(2024, 5, 10, 13, 45, 30))
        );
        assert_eq!(
            parse_datetime("2024-05-10T13:45:30"),
            Some(dt(2024, 5, 10, 13, 45, 30))
        );
        assert_eq!(
            parse_datetime(" 2024-05-10T13:45 "),
            Some(dt(2024, 5, 10, 13, 45, 0))
        );
        assert_eq!(
            parse_datetime("2024-05-10T13:45:30+02:00"),
            Some(dt(2024, 5, 10, 13, 45, 30))
        );
    }

    #[test]
    fn datetime_rejects_garbage() {
        assert_eq!(parse_datetime("yesterday"), None);
        assert_eq!(parse_datetime("2024-13-01"), None);
        assert_eq!(parse_datetime(""), None);
    }

    #[test]
    fn numbers_and_missing_tokens() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(" -3 "), Some(-3.0));
        for token in MISSING_TOKENS {
            assert!(parse_number(token).unwrap().is_nan(), "token {token:?}");
        }
        assert_eq!(parse_number("warm"), None);
    }

    #[test]
    fn sorted_order_is_stable() {
        let table = ColumnTable {
            datetimes: vec![
                dt(2024, 1, 2, 0, 0, 0),
                dt(2024, 1, 1, 0, 0, 0),
                dt(2024, 1, 2, 0, 0, 0),
            ],
            numeric: BTreeMap::new(),
        };
        assert_eq!(table.sorted_order(), vec![1, 0, 2]);
    }
}
