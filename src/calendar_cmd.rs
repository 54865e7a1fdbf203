//! Calendar command: percentile grid for one station and year.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use tracing::{info, info_span};

use isithot_climatology::{CalendarGrid, DataProvider, prepare_calendar};
use isithot_io::calendar_to_json;

use crate::cli::CalendarArgs;
use crate::config::IsithotConfig;
use crate::convert;

/// Build the calendar grid for a year and print it as a table.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let config = IsithotConfig::load(&args.config)?;
    let station_cfg = config.station(Some(args.station.as_str()))?;
    let climatology = convert::build_climatology_config(&config.pipeline)?;
    let provider = convert::build_provider(station_cfg)?;

    let today = Local::now().date_naive();
    provider.station().check_year(args.year, today)?;
    let anchor = anchor_date(args.year, today)?;

    info!(station = %station_cfg.id, year = args.year, "building calendar");
    let (_, grid) = prepare_calendar(&provider, anchor, None, &climatology)
        .with_context(|| format!("failed to build calendar for station {}", station_cfg.id))?;

    print!("{}", render(&grid));

    if let Some(path) = args.output {
        let json =
            calendar_to_json(provider.station(), &grid).context("failed to serialise calendar")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write calendar: {}", path.display()))?;
        info!(path = %path.display(), "calendar written");
    }
    Ok(())
}

/// Today for the current year, January 1st for past years.
fn anchor_date(year: i32, today: NaiveDate) -> Result<NaiveDate> {
    if year == today.year() {
        return Ok(today);
    }
    NaiveDate::from_ymd_opt(year, 1, 1).with_context(|| format!("invalid year {year}"))
}

/// Formats the grid with one line per month and `.` for empty cells.
fn render(grid: &CalendarGrid) -> String {
    let mut out = format!("{:>4}", grid.year());
    for day in 1..=31 {
        out.push_str(&format!("{day:>4}"));
    }
    out.push('\n');
    for row in grid.rows() {
        out.push_str(&format!("{:>4}", row.label));
        for cell in &row.cells {
            match cell {
                Some(p) => out.push_str(&format!("{:>4.0}", p)),
                None => out.push_str("   ."),
            }
        }
        out.push('\n');
    }
    out
}
