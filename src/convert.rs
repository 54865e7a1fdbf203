//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use isithot_climatology::{ClimatologyConfig, ColumnMapping, ReadingPolicy, Station};
use isithot_io::{DataFormat, FileProvider};

use crate::config::{ColumnsToml, PipelineToml, StationToml};

/// Parses a reading policy name into the corresponding enum variant.
pub fn parse_reading_policy(s: &str) -> Result<ReadingPolicy> {
    match s.to_lowercase().as_str() {
        "min_max_average" | "minmax" => Ok(ReadingPolicy::MinMaxAverage),
        "mean" => Ok(ReadingPolicy::Mean),
        other => bail!("unknown reading policy: {other:?}"),
    }
}

/// Parses a data format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<DataFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Ok(DataFormat::Csv),
        "parquet" => Ok(DataFormat::Parquet),
        other => bail!("unknown data format: {other:?}"),
    }
}

/// Builds a validated [`ClimatologyConfig`] from the TOML pipeline table.
pub fn build_climatology_config(pipeline: &PipelineToml) -> Result<ClimatologyConfig> {
    let cfg = ClimatologyConfig::new()
        .with_window_half_width(pipeline.window_half_width)
        .with_window_points(pipeline.window_points)
        .with_reading_policy(parse_reading_policy(&pipeline.reading_policy)?)
        .with_hot_threshold(pipeline.hot_threshold)
        .with_density_points(pipeline.density_points);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`ColumnMapping`] from the TOML column table.
pub fn build_column_mapping(columns: &ColumnsToml) -> ColumnMapping {
    ColumnMapping {
        datetime: columns.datetime.clone(),
        temp_mean: columns.temp_mean.clone(),
        temp_max: columns.temp_max.clone(),
        temp_min: columns.temp_min.clone(),
        day_of_year: columns.day_of_year.clone(),
    }
}

/// Builds the station metadata from a TOML station table.
pub fn build_station(station: &StationToml) -> Station {
    Station::new(&station.id, &station.name, station.min_year)
}

/// Builds a [`FileProvider`] for one configured station.
pub fn build_provider(station: &StationToml) -> Result<FileProvider> {
    let mut provider = FileProvider::new(
        build_station(station),
        &station.daily,
        &station.current,
    )
    .with_columns(build_column_mapping(&station.columns));
    if let Some(ref format) = station.format {
        provider = provider.with_format(parse_format(format)?);
    }
    Ok(provider)
}
