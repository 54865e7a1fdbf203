use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Is it hot today? Ranks today's temperature against a station's history.
#[derive(Parser)]
#[command(
    name = "isithot",
    version,
    about = "Rank today's temperature against a station's climatology"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Answer "is it hot?" for one station and date.
    Report(ReportArgs),
    /// Build the percentile calendar for a past or current year.
    Calendar(CalendarArgs),
    /// List the configured stations.
    Stations(StationsArgs),
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "isithot.toml")]
    pub config: PathBuf,

    /// Station id; defaults to the first configured station.
    #[arg(short, long)]
    pub station: Option<String>,

    /// Anchor date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Write the full result as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "isithot.toml")]
    pub config: PathBuf,

    /// Station id.
    #[arg(short, long)]
    pub station: String,

    /// Calendar year.
    #[arg(short, long)]
    pub year: i32,

    /// Write the grid as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `stations` subcommand.
#[derive(clap::Args)]
pub struct StationsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "isithot.toml")]
    pub config: PathBuf,
}
