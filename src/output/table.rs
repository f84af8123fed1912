//! CSV writers for the cleaned table, the long format and the aggregates.
//!
//! Aggregate rows serialize their own headers through serde renames, so the
//! column names on disk live next to the row structs in `stats`. The cleaned
//! wide table is the one file written by hand, its year columns being dynamic.

use crate::ingest::{WideTable, CODE_COLUMN, NAME_COLUMN};
use crate::pipeline::PipelineRun;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

pub const CLEANED_WIDE: &str = "cleaned_internet_usage.csv";
pub const LONG_FORMAT: &str = "internet_usage_long_format.csv";
pub const AVERAGE_PER_YEAR: &str = "average_usage_per_year.csv";
pub const MEDIAN_PER_COUNTRY: &str = "median_usage_per_country.csv";
pub const STD_DEV_PER_COUNTRY: &str = "std_dev_usage_per_country.csv";
pub const TOTAL_PER_CONTINENT: &str = "total_usage_per_continent.csv";
pub const GROWTH_PER_CONTINENT: &str = "yearly_growth_rate_per_continent.csv";
pub const GROWTH_PER_COUNTRY: &str = "yearly_growth_rate_per_country.csv";
pub const TOP_COUNTRIES: &str = "top_countries.csv";

/// Write every output table under `out_dir`, creating it if needed.
#[tracing::instrument(level = "info", skip(run, out_dir), fields(directory = %out_dir.as_ref().display()))]
pub fn write_all<P: AsRef<Path>>(run: &PipelineRun, out_dir: P) -> Result<()> {
    let dir = out_dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    write_wide(dir.join(CLEANED_WIDE), &run.cleaned)?;
    write_csv(dir.join(LONG_FORMAT), &run.long_records)?;
    write_csv(dir.join(AVERAGE_PER_YEAR), &run.average_per_year)?;
    write_csv(dir.join(MEDIAN_PER_COUNTRY), &run.median_per_country)?;
    write_csv(dir.join(STD_DEV_PER_COUNTRY), &run.std_dev_per_country)?;
    write_csv(dir.join(TOTAL_PER_CONTINENT), &run.total_per_continent)?;
    write_csv(dir.join(GROWTH_PER_CONTINENT), &run.growth_per_continent)?;
    write_csv(dir.join(GROWTH_PER_COUNTRY), &run.growth_per_country)?;
    write_csv(dir.join(TOP_COUNTRIES), &run.top_countries)?;

    info!(files = 9, "wrote all output tables");
    Ok(())
}

/// Serialize rows into a CSV file, headers included.
fn write_csv<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing a row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Write the cleaned wide table with its original year columns.
fn write_wide<P: AsRef<Path>>(path: P, table: &WideTable) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer
        .write_record(
            [NAME_COLUMN, CODE_COLUMN]
                .into_iter()
                .chain(table.year_headers.iter().map(String::as_str)),
        )
        .with_context(|| format!("writing the header to {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(
                [row.country_name.as_str(), row.country_code.as_str()]
                    .into_iter()
                    .chain(row.values.iter().map(String::as_str)),
            )
            .with_context(|| format!("writing a row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
