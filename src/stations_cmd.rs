//! Stations command: list what the configuration knows about.

use anyhow::Result;

use crate::cli::StationsArgs;
use crate::config::{IsithotConfig, StationToml};

/// Print one line per configured station.
pub fn run(args: StationsArgs) -> Result<()> {
    let config = IsithotConfig::load(&args.config)?;
    if config.stations.is_empty() {
        println!("no stations configured in {}", args.config.display());
    }
    for station in &config.stations {
        println!("{}", describe(station));
    }
    Ok(())
}

fn describe(station: &StationToml) -> String {
    format!(
        "{:<8} {:<24} since {}  {}",
        station.id,
        station.name,
        station.min_year,
        station.daily.display()
    )
}
