use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use isithot_calendar::{MAX_DAYS_IN_MONTH, year_dates};
use isithot_climatology::{
    AvgCompare, ClimatologyConfig, ClimatologyError, ColumnMapping, DailySeries, DataProvider,
    HotWarm, RawDailyRow, ReadingPolicy, Station, SubDailyReading, SubDailySeries, YesNo,
    build_calendar, build_plot_data, prepare_calendar, prepare_data,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(d: NaiveDate, h: u32) -> NaiveDateTime {
    d.and_hms_opt(h, 0, 0).unwrap()
}

fn reading(ts: NaiveDateTime, min: f64, max: f64) -> SubDailyReading {
    SubDailyReading {
        timestamp: ts,
        temp_max: max,
        temp_min: min,
        temp_mean: (min + max) / 2.0,
    }
}

/// Ten years (2014..=2023) of June 11..=20 with the values 0..99 in order,
/// so the time-of-year distribution around 2024-06-15 is exactly 0..99.
fn evenly_spaced_history() -> Vec<RawDailyRow> {
    let mut rows = Vec::new();
    let mut value = 0.0;
    for year in 2014..=2023 {
        for day in 11..=20 {
            rows.push(RawDailyRow::new(date(year, 6, day), value));
            value += 1.0;
        }
    }
    rows
}

/// Full calendar years with one constant value per year.
fn constant_years(years: &[(i32, f64)]) -> Vec<RawDailyRow> {
    years
        .iter()
        .flat_map(|&(year, value)| {
            year_dates(year)
                .unwrap()
                .into_iter()
                .map(move |d| RawDailyRow::new(d, value))
        })
        .collect()
}

#[derive(Debug)]
struct MemoryProvider {
    station: Station,
    columns: ColumnMapping,
    daily: Vec<RawDailyRow>,
    now: Vec<SubDailyReading>,
    fail: bool,
}

impl MemoryProvider {
    fn new(daily: Vec<RawDailyRow>, now: Vec<SubDailyReading>) -> Self {
        Self {
            station: Station::new("test", "Test Station", 2000),
            columns: ColumnMapping::default(),
            daily,
            now,
            fail: false,
        }
    }
}

impl DataProvider for MemoryProvider {
    type Error = std::io::Error;

    fn station(&self) -> &Station {
        &self.station
    }

    fn column_mapping(&self) -> &ColumnMapping {
        &self.columns
    }

    fn daily_data(&self, _date: NaiveDate) -> Result<Vec<RawDailyRow>, Self::Error> {
        if self.fail {
            return Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "database unavailable",
            ));
        }
        Ok(self.daily.clone())
    }

    fn current_data(&self, _date: NaiveDate) -> Result<Vec<SubDailyReading>, Self::Error> {
        Ok(self.now.clone())
    }
}

#[test]
fn seventy_degrees_in_evenly_spaced_distribution() {
    let today = date(2024, 6, 15);
    let provider = MemoryProvider::new(
        evenly_spaced_history(),
        vec![reading(at(today, 3), 70.0, 70.0), reading(at(today, 9), 70.0, 70.0)],
    );
    let data = prepare_data(&provider, today, &ClimatologyConfig::new()).unwrap();

    assert_relative_eq!(data.current_avg(), 70.0);
    assert_relative_eq!(data.current_avg_percentile(), 70.5, epsilon = 1e-12);
    assert_eq!(data.yes_no(), YesNo::Yeah);
    assert_eq!(data.yes_no().to_string(), "Yeah!");
    assert_eq!(data.hot_warm(), HotWarm::Hot);
    assert_eq!(data.avg_compare(), AvgCompare::Quite(HotWarm::Hot));
    assert_eq!(data.avg_compare().to_string(), "It's quite hot!");

    assert_eq!(data.toy_data().len(), 100);
    assert_relative_eq!(data.q5(), 4.95, epsilon = 1e-9);
    assert_relative_eq!(data.median(), 49.5, epsilon = 1e-9);
    assert_relative_eq!(data.q95(), 94.05, epsilon = 1e-9);
    assert_eq!(data.reference_period(), Some((2014, 2023)));
}

#[test]
fn hot_threshold_is_configurable() {
    let today = date(2024, 6, 15);
    let daily = DailySeries::from_rows(&evenly_spaced_history()).unwrap();
    let now = SubDailySeries::from_rows(&[reading(at(today, 3), 70.0, 70.0)]).unwrap();
    let config = ClimatologyConfig::new().with_hot_threshold(80.0);
    let data = build_plot_data(daily, now, today, &config).unwrap();
    assert_eq!(data.avg_compare().to_string(), "It's quite warm!");
}

#[test]
fn no_current_data_yet() {
    let today = date(2024, 6, 15);
    let mut history = evenly_spaced_history();
    // a recorded value for today must not survive the injected missing reading
    history.push(RawDailyRow::new(today, 50.0));
    let provider = MemoryProvider::new(
        history,
        vec![reading(at(date(2024, 6, 14), 23), 10.0, 12.0)],
    );
    let data = prepare_data(&provider, today, &ClimatologyConfig::new()).unwrap();

    assert!(data.current_avg().is_nan());
    assert!(data.current_avg_percentile().is_nan());
    assert_eq!(data.yes_no(), YesNo::NoData);
    assert_eq!(data.yes_no().to_string(), "not sure, we have no data yet");
    assert_eq!(data.avg_compare().to_string(), "could be hotter, could be cooler");
    assert_eq!(data.calendar().cell(6, 15), None);
    assert_eq!(data.current().n_readings, 0);
}

#[test]
fn single_trend_point_does_not_fail() {
    let today = date(2024, 1, 10);
    let daily = DailySeries::from_rows(&[RawDailyRow::new(date(2023, 1, 10), 3.0)]).unwrap();
    let now = SubDailySeries::from_rows(&[reading(at(today, 1), 2.0, 4.0)]).unwrap();
    let data = build_plot_data(daily, now, today, &ClimatologyConfig::new()).unwrap();

    assert_eq!(data.trend_overall_data().len(), 1);
    assert!(data.trend_overall().slope.is_nan());
    assert!(data.trend_overall().intercept.is_nan());
    assert!(data.trend_month().slope.is_nan());
    assert_relative_eq!(data.current_avg_percentile(), 50.0);
    assert!(data.density_curve().is_empty());
}

#[test]
fn empty_history_is_all_nan() {
    let today = date(2024, 3, 1);
    let now = SubDailySeries::from_rows(&[reading(at(today, 1), 2.0, 4.0)]).unwrap();
    let data =
        build_plot_data(DailySeries::empty(), now, today, &ClimatologyConfig::new()).unwrap();
    assert!(data.current_avg_percentile().is_nan());
    assert!(data.q5().is_nan());
    assert!(data.median().is_nan());
    assert!(data.q95().is_nan());
    assert_eq!(data.reference_period(), None);
    assert_eq!(data.calendar().rows().len(), 12);
    // the injected day has no history to be ranked against
    assert_eq!(data.calendar().n_filled(), 0);
}

#[test]
fn trends_follow_warming_history() {
    // +0.5 per year over the full record, with a gap year keeping its slot
    let mut rows = constant_years(&[(2000, 10.0), (2001, 10.5), (2003, 11.5)]);
    rows.extend(constant_years(&[(2004, 12.0)]));
    let daily = DailySeries::from_rows(&rows).unwrap();
    let today = date(2005, 7, 1);
    let data =
        build_plot_data(daily, SubDailySeries::empty(), today, &ClimatologyConfig::new()).unwrap();

    let indices: Vec<usize> = data.trend_overall_data().iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 1, 3, 4]);
    assert_relative_eq!(data.trend_overall().slope, 0.5, epsilon = 1e-9);
    assert_relative_eq!(data.trend_overall().intercept, 10.0, epsilon = 1e-9);
    assert_relative_eq!(data.trend_overall().per_century(), 50.0, epsilon = 1e-7);
    assert_relative_eq!(data.trend_month().slope, 0.5, epsilon = 1e-9);
}

#[test]
fn density_curve_covers_todays_record() {
    let today = date(2024, 6, 15);
    let daily = DailySeries::from_rows(&evenly_spaced_history()).unwrap();
    let now = SubDailySeries::from_rows(&[reading(at(today, 3), 150.0, 150.0)]).unwrap();
    let config = ClimatologyConfig::new().with_density_points(50);
    let data = build_plot_data(daily, now, today, &config).unwrap();

    let curve = data.density_curve();
    assert_eq!(curve.len(), 50);
    assert_relative_eq!(curve[0].0, -1.0, epsilon = 1e-12);
    assert_relative_eq!(curve[49].0, 151.0, epsilon = 1e-9);
    assert!(curve.iter().all(|&(_, y)| y >= 0.0));
    assert_eq!(data.yes_no(), YesNo::BloodyHellYes);
}

#[test]
fn mean_policy_changes_current_value() {
    let today = date(2024, 6, 15);
    let daily = DailySeries::from_rows(&evenly_spaced_history()).unwrap();
    let now = SubDailySeries::from_rows(&[
        SubDailyReading {
            timestamp: at(today, 1),
            temp_max: 30.0,
            temp_min: 10.0,
            temp_mean: 12.0,
        },
        SubDailyReading {
            timestamp: at(today, 2),
            temp_max: 30.0,
            temp_min: 10.0,
            temp_mean: 14.0,
        },
    ])
    .unwrap();
    let config = ClimatologyConfig::new().with_reading_policy(ReadingPolicy::Mean);
    let data = build_plot_data(daily, now, today, &config).unwrap();
    assert_relative_eq!(data.current_avg(), 13.0);
    assert_relative_eq!(data.current().min, 10.0);
    assert_relative_eq!(data.current().max, 30.0);
}

#[test]
fn calendar_ranks_each_day_against_its_own_window() {
    let mut rows = constant_years(&[(2020, 0.0), (2021, 10.0), (2022, 20.0)]);
    for day in 1..=10 {
        rows.push(RawDailyRow::new(date(2023, 1, day), 15.0));
    }
    let daily = DailySeries::from_rows(&rows).unwrap();
    let anchor = date(2023, 1, 12);
    let grid = build_calendar(&daily, anchor, Some(25.0), &ClimatologyConfig::new()).unwrap();

    assert_eq!(grid.year(), 2023);
    for day in 1..=10 {
        let cell = grid.cell(1, day).unwrap();
        assert_relative_eq!(cell, 200.0 / 3.0, epsilon = 1e-9);
    }
    assert_eq!(grid.cell(1, 11), None);
    assert_eq!(grid.cell(1, 12), Some(100.0));
    assert_eq!(grid.cell(2, 29), None);
    assert_eq!(grid.cell(2, 30), None);
    assert_eq!(grid.n_filled(), 11);
    assert_eq!(grid.days().len(), 365);
    assert!(grid.days()[12].temp_mean.is_nan());
    assert_relative_eq!(grid.days()[11].temp_mean, 25.0);
}

#[test]
fn calendar_history_drops_missing_means() {
    let mut rows = constant_years(&[(2021, 0.0)]);
    rows[5].temp_mean = f64::NAN;
    rows.push(RawDailyRow::new(date(2022, 1, 3), 5.0));
    rows.push(RawDailyRow::new(date(2022, 1, 4), f64::NAN));
    let daily = DailySeries::from_rows(&rows).unwrap();
    let grid = build_calendar(&daily, date(2022, 12, 31), None, &ClimatologyConfig::new()).unwrap();
    assert_eq!(grid.cell(1, 3), Some(100.0));
    assert_eq!(grid.cell(1, 4), None);
    assert_eq!(grid.n_filled(), 1);
}

#[test]
fn calendar_of_year_without_data_is_empty_but_complete() {
    let daily = DailySeries::from_rows(&constant_years(&[(2020, 1.0)])).unwrap();
    let grid = build_calendar(&daily, date(2022, 1, 1), None, &ClimatologyConfig::new()).unwrap();
    assert_eq!(grid.rows().len(), 12);
    for (i, row) in grid.rows().iter().enumerate() {
        assert_eq!(row.month, i as u32 + 1);
        assert_eq!(row.cells.len(), MAX_DAYS_IN_MONTH);
        assert!(row.cells.iter().all(Option::is_none));
    }
    assert_eq!(grid.rows()[8].label, "Sep");
}

#[test]
fn previous_year_calendar_through_provider() {
    let provider = MemoryProvider::new(constant_years(&[(2020, 0.0), (2021, 10.0)]), Vec::new());
    let (daily, grid) =
        prepare_calendar(&provider, date(2021, 1, 1), None, &ClimatologyConfig::new()).unwrap();
    assert_eq!(daily.len(), 366 + 365);
    assert_eq!(grid.n_filled(), 365);
    assert!(grid.days().iter().all(|d| d.percentile == 100.0));
    assert!(grid.days().iter().all(|d| d.date.year() == 2021));
}

#[test]
fn provider_error_is_passed_through() {
    let mut provider = MemoryProvider::new(Vec::new(), Vec::new());
    provider.fail = true;
    let err = prepare_data(&provider, date(2024, 1, 1), &ClimatologyConfig::new()).unwrap_err();
    match err {
        ClimatologyError::Provider(source) => {
            let io = source.downcast_ref::<std::io::Error>().unwrap();
            assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
        }
        other => panic!("expected a provider error, got {other:?}"),
    }
}

#[test]
fn unordered_provider_rows_are_rejected() {
    let provider = MemoryProvider::new(
        vec![
            RawDailyRow::new(date(2020, 1, 2), 1.0),
            RawDailyRow::new(date(2020, 1, 1), 1.0),
        ],
        Vec::new(),
    );
    let err = prepare_data(&provider, date(2024, 1, 1), &ClimatologyConfig::new()).unwrap_err();
    assert!(matches!(err, ClimatologyError::UnorderedTimestamps { .. }));
}

#[test]
fn invalid_config_is_rejected() {
    let provider = MemoryProvider::new(Vec::new(), Vec::new());
    let config = ClimatologyConfig::new().with_density_points(0);
    let err = prepare_data(&provider, date(2024, 1, 1), &config).unwrap_err();
    assert!(matches!(err, ClimatologyError::InvalidConfig { .. }));
}

#[test]
fn inputs_are_not_modified() {
    let today = date(2024, 6, 15);
    let daily = DailySeries::from_rows(&evenly_spaced_history()).unwrap();
    let snapshot = daily.clone();
    let _ = build_calendar(&daily, today, Some(99.0), &ClimatologyConfig::new()).unwrap();
    assert_eq!(daily, snapshot);
    assert!(daily.get(today).is_none());
}
