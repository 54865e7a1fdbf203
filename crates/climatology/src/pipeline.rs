//! Orchestration of the normaliser, reference distribution, trends and
//! calendar into a [`PlotData`] record.

use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use crate::config::ClimatologyConfig;
use crate::error::ClimatologyError;
use crate::grid::{CalendarGrid, build_calendar};
use crate::plot_data::PlotData;
use crate::provider::DataProvider;
use crate::reading::CurrentReading;
use crate::reference::ReferenceDistribution;
use crate::series::{DailySeries, SubDailySeries};
use crate::trend::{fit_trend, yearly_means};

/// Assembles the plot data for `date` from already-normalised series.
///
/// Missing data never fails this function: an empty sub-daily window, an
/// empty reference distribution or a single trend year all surface as `NaN`
/// values in the result.
///
/// # Errors
///
/// - [`ClimatologyError::InvalidConfig`] if `config` does not validate.
/// - [`ClimatologyError::Calendar`] if the year of `date` cannot be laid out.
#[tracing::instrument(skip_all, fields(%date))]
pub fn build_plot_data(
    daily: DailySeries,
    now: SubDailySeries,
    date: NaiveDate,
    config: &ClimatologyConfig,
) -> Result<PlotData, ClimatologyError> {
    config.validate()?;

    let current = CurrentReading::aggregate(&now, date, config.reading_policy());
    if !current.is_available() {
        warn!("no current reading yet, percentile will be undefined");
    }

    // The anchor day is always injected, so a missing reading blanks its cell.
    let calendar = build_calendar(&daily, date, Some(current.value), config)?;

    let trend_overall_data = yearly_means(&daily);
    let trend_overall = fit_trend(&trend_overall_data);

    let reference = ReferenceDistribution::build(&daily, date, config);
    if reference.n_defined() == 0 {
        warn!("time-of-year reference distribution is empty");
    }
    let trend_month_data = yearly_means(reference.subset());
    let trend_month = fit_trend(&trend_month_data);

    let current_avg_percentile = reference.percentile_of(current.value);
    let q5 = reference.quantile(0.05);
    let median = reference.median();
    let q95 = reference.quantile(0.95);

    info!(
        current_avg = current.value,
        current_avg_percentile,
        n_reference = reference.n_defined(),
        q5,
        median,
        q95,
        "prepared plot data"
    );

    Ok(PlotData {
        current_date: date,
        daily,
        now,
        reference,
        trend_overall_data,
        trend_month_data,
        calendar,
        trend_overall,
        trend_month,
        current,
        current_avg_percentile,
        q5,
        median,
        q95,
        hot_threshold: config.hot_threshold(),
        density_points: config.density_points(),
    })
}

/// Fetches both series from `provider` and assembles the plot data for
/// `date`.
///
/// # Errors
///
/// Provider failures are returned unchanged as
/// [`ClimatologyError::Provider`]; malformed series and invalid
/// configuration as described on [`build_plot_data`].
pub fn prepare_data<P: DataProvider>(
    provider: &P,
    date: NaiveDate,
    config: &ClimatologyConfig,
) -> Result<PlotData, ClimatologyError> {
    let _span = info_span!("prepare_data", station = %provider.station().id, %date).entered();

    let daily = fetch_daily(provider, date)?;
    let rows = provider
        .current_data(date)
        .map_err(ClimatologyError::provider)?;
    let now = SubDailySeries::from_rows(&rows)?;
    info!(n_daily = daily.len(), n_now = now.len(), "fetched station data");

    build_plot_data(daily, now, date, config)
}

/// Fetches the daily series from `provider` and builds the calendar grid for
/// the year of `date`.
///
/// Pass `current` to inject today's reading at `date`; leave it `None` for
/// a past year.
pub fn prepare_calendar<P: DataProvider>(
    provider: &P,
    date: NaiveDate,
    current: Option<f64>,
    config: &ClimatologyConfig,
) -> Result<(DailySeries, CalendarGrid), ClimatologyError> {
    let _span =
        info_span!("prepare_calendar", station = %provider.station().id, %date).entered();
    config.validate()?;

    let daily = fetch_daily(provider, date)?;
    let calendar = build_calendar(&daily, date, current, config)?;
    Ok((daily, calendar))
}

fn fetch_daily<P: DataProvider>(
    provider: &P,
    date: NaiveDate,
) -> Result<DailySeries, ClimatologyError> {
    let rows = provider
        .daily_data(date)
        .map_err(ClimatologyError::provider)?;
    DailySeries::from_rows(&rows)
}
