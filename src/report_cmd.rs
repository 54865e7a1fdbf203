//! Report command: is it hot today at one station?

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use isithot_climatology::{DataProvider, PlotData, Station, prepare_data};
use isithot_io::to_json;

use crate::cli::ReportArgs;
use crate::config::IsithotConfig;
use crate::convert;

/// Run the report pipeline and print the narrative summary.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();
    let config = IsithotConfig::load(&args.config)?;
    let station_cfg = config.station(args.station.as_deref())?;
    let climatology = convert::build_climatology_config(&config.pipeline)?;
    let provider = convert::build_provider(station_cfg)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    info!(station = %station_cfg.id, %date, "preparing report");
    let data = prepare_data(&provider, date, &climatology)
        .with_context(|| format!("failed to prepare data for station {}", station_cfg.id))?;

    print!("{}", summary(provider.station(), &data));

    if let Some(path) = args.output {
        let json = to_json(provider.station(), &data).context("failed to serialise report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

/// Renders the human-readable answer for one pipeline result.
fn summary(station: &Station, data: &PlotData) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "Is it hot in {} on {}?", station.name, data.current_date());
    let _ = writeln!(out, "{} {}", data.yes_no(), data.avg_compare());

    let current = data.current();
    if current.is_available() {
        let _ = writeln!(
            out,
            "The maximum temperature so far is {:.1} °C, the minimum overnight was {:.1} °C. \
             The average of the two is {:.1} °C.",
            current.max,
            current.min,
            current.value,
        );
    } else {
        let _ = writeln!(out, "No readings since midnight yet.");
    }

    let percentile = data.current_avg_percentile();
    if !percentile.is_nan() {
        let _ = write!(
            out,
            "That is hotter than {percentile:.0}% of daily average temperatures at {}",
            station.id.to_uppercase(),
        );
        match data.reference_period() {
            Some((first, last)) => {
                let _ = writeln!(out, " for this time of year over the period {first} - {last}.");
            }
            None => {
                let _ = writeln!(out, ".");
            }
        }
    }

    let _ = writeln!(
        out,
        "5th / 50th / 95th percentile: {:.1} / {:.1} / {:.1} °C",
        data.q5(),
        data.median(),
        data.q95(),
    );

    let month = data.trend_month();
    let overall = data.trend_overall();
    if month.is_defined() {
        let _ = writeln!(
            out,
            "Trend for this time of year: {:+.1} K/century",
            month.per_century()
        );
    }
    if overall.is_defined() {
        let _ = writeln!(out, "Overall trend: {:+.1} K/century", overall.per_century());
    }
    out
}
