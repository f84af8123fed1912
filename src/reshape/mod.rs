// src/reshape/mod.rs
use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::ingest::{WideRow, WideTable};

/// A single (country, year) observation, flattened out of a wide row.
/// The usage value is still the raw source string; coercion happens in the
/// enrichment stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country_name: String,
    pub country_code: String,
    pub year: i32,
    pub raw_usage: String,
}

/// Drop every row with a missing identifying field or a missing year value.
///
/// This runs before reshaping so that an incomplete country contributes zero
/// observations rather than a partial series.
pub fn drop_incomplete(table: WideTable) -> WideTable {
    let total = table.rows.len();
    let rows: Vec<WideRow> = table.rows.into_iter().filter(is_complete).collect();
    let dropped = total - rows.len();
    if dropped > 0 {
        info!(dropped, kept = rows.len(), "dropped incomplete rows");
    } else {
        debug!(rows = rows.len(), "no incomplete rows");
    }
    WideTable {
        year_headers: table.year_headers,
        rows,
    }
}

fn is_complete(row: &WideRow) -> bool {
    !row.country_name.trim().is_empty()
        && !row.country_code.trim().is_empty()
        && row.values.iter().all(|v| !v.is_empty())
}

/// Flatten the cleaned wide table into long form: one observation per
/// (row, year column), years taken from the column headers.
///
/// A header that does not parse as an integer year is fatal; the time axis
/// cannot be recovered by skipping columns.
pub fn to_long(table: &WideTable) -> Result<Vec<Observation>> {
    let years = parse_year_headers(&table.year_headers)?;

    let mut observations = Vec::with_capacity(table.rows.len() * years.len());
    for row in &table.rows {
        for (idx, &year) in years.iter().enumerate() {
            observations.push(Observation {
                country_name: row.country_name.clone(),
                country_code: row.country_code.clone(),
                year,
                raw_usage: row.values.get(idx).cloned().unwrap_or_default(),
            });
        }
    }

    info!(
        observations = observations.len(),
        countries = table.rows.len(),
        "reshaped to long form"
    );
    Ok(observations)
}

fn parse_year_headers(headers: &[String]) -> Result<Vec<i32>> {
    headers
        .iter()
        .map(|header| {
            header
                .trim()
                .parse::<i32>()
                .map_err(|_| anyhow!("malformed year column `{}`", header))
        })
        .collect()
}
