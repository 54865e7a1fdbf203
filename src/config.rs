use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Top-level isithot configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsithotConfig {
    /// Pipeline settings shared by all stations.
    #[serde(default)]
    pub pipeline: PipelineToml,

    /// Configured stations, in display order.
    #[serde(default, rename = "station")]
    pub stations: Vec<StationToml>,
}

impl IsithotConfig {
    /// Reads and parses a TOML configuration file.
    ///
    /// Relative data paths are resolved against the directory of the
    /// configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: IsithotConfig =
            toml::from_str(&toml_str).context("failed to parse TOML config")?;
        if let Some(base) = path.parent() {
            for station in &mut config.stations {
                station.daily = base.join(&station.daily);
                station.current = base.join(&station.current);
            }
        }
        Ok(config)
    }

    /// Looks up a station by id, or the first station when `id` is `None`.
    pub fn station(&self, id: Option<&str>) -> Result<&StationToml> {
        match id {
            Some(id) => self.stations.iter().find(|s| s.id == id).ok_or_else(|| {
                let available: Vec<_> = self.stations.iter().map(|s| s.id.as_str()).collect();
                anyhow::anyhow!("unknown station {id:?} (available: {available:?})")
            }),
            None => match self.stations.first() {
                Some(station) => Ok(station),
                None => bail!("no stations configured: add a [[station]] table"),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineToml {
    #[serde(default = "default_window_half_width")]
    pub window_half_width: u16,
    #[serde(default = "default_window_points")]
    pub window_points: usize,
    #[serde(default = "default_reading_policy")]
    pub reading_policy: String,
    #[serde(default = "default_hot_threshold")]
    pub hot_threshold: f64,
    #[serde(default = "default_density_points")]
    pub density_points: usize,
}

impl Default for PipelineToml {
    fn default() -> Self {
        Self {
            window_half_width: default_window_half_width(),
            window_points: default_window_points(),
            reading_policy: default_reading_policy(),
            hot_threshold: default_hot_threshold(),
            density_points: default_density_points(),
        }
    }
}

fn default_window_half_width() -> u16 {
    7
}
fn default_window_points() -> usize {
    15
}
fn default_reading_policy() -> String {
    "min_max_average".to_string()
}
fn default_hot_threshold() -> f64 {
    15.0
}
fn default_density_points() -> usize {
    200
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationToml {
    pub id: String,
    pub name: String,
    pub min_year: i32,
    /// `csv` or `parquet`; inferred from the daily file's extension when
    /// omitted.
    #[serde(default)]
    pub format: Option<String>,
    pub daily: PathBuf,
    pub current: PathBuf,
    #[serde(default)]
    pub columns: ColumnsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnsToml {
    #[serde(default = "default_datetime_column")]
    pub datetime: String,
    #[serde(default = "default_temp_mean_column")]
    pub temp_mean: String,
    #[serde(default = "default_temp_max_column")]
    pub temp_max: String,
    #[serde(default = "default_temp_min_column")]
    pub temp_min: String,
    #[serde(default = "default_day_of_year_column")]
    pub day_of_year: String,
}

impl Default for ColumnsToml {
    fn default() -> Self {
        Self {
            datetime: default_datetime_column(),
            temp_mean: default_temp_mean_column(),
            temp_max: default_temp_max_column(),
            temp_min: default_temp_min_column(),
            day_of_year: default_day_of_year_column(),
        }
    }
}

fn default_datetime_column() -> String {
    "date".to_string()
}
fn default_temp_mean_column() -> String {
    "temp_mean".to_string()
}
fn default_temp_max_column() -> String {
    "temp_max".to_string()
}
fn default_temp_min_column() -> String {
    "temp_min".to_string()
}
fn default_day_of_year_column() -> String {
    "doy".to_string()
}
