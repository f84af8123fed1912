// src/ingest/mod.rs
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::info;

/// Header of the first identifying column in the source table.
pub const NAME_COLUMN: &str = "Country Name";
/// Header of the second identifying column in the source table.
pub const CODE_COLUMN: &str = "Country Code";

/// The usage table as loaded: one row per country, one column per year.
///
/// Values are kept exactly as the source spelled them; an empty string is a
/// missing cell. Nothing is parsed here so that the cleaned table can be
/// written back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    /// Year column headers in source order (everything after the two
    /// identifying columns). Still raw strings; the reshaper parses them.
    pub year_headers: Vec<String>,
    pub rows: Vec<WideRow>,
}

/// One source row.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub country_name: String,
    pub country_code: String,
    /// One raw value per entry of `WideTable::year_headers`.
    pub values: Vec<String>,
}

/// Read the wide usage table from `path`.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_wide_csv<P: AsRef<Path>>(path: P) -> Result<WideTable> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening input file {}", path.display()))?;
    let table = read_wide(file, &path.display().to_string())?;
    info!(
        rows = table.rows.len(),
        years = table.year_headers.len(),
        "loaded wide table"
    );
    Ok(table)
}

/// Parse the wide usage table out of any reader.
///
/// The header row must start with `Country Name, Country Code`; every later
/// column is treated as a year column. Records with a field count different
/// from the header are a parse error, not padded.
pub fn read_wide<R: Read>(reader: R, source: &str) -> Result<WideTable> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()
        .with_context(|| format!("reading header row of {}", source))?
        .clone();

    // The two identifying columns anchor the layout; without them the year
    // axis cannot be told apart from the labels.
    for (idx, expected) in [NAME_COLUMN, CODE_COLUMN].into_iter().enumerate() {
        match headers.get(idx).map(str::trim) {
            Some(actual) if actual == expected => {}
            other => {
                return Err(anyhow!(
                    "{}: expected column {} to be `{}`, found {:?}",
                    source,
                    idx,
                    expected,
                    other
                ))
            }
        }
    }

    let year_headers: Vec<String> = headers.iter().skip(2).map(str::to_string).collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {} at record {}", source, idx))?;
        rows.push(WideRow {
            country_name: record.get(0).unwrap_or_default().to_string(),
            country_code: record.get(1).unwrap_or_default().to_string(),
            values: record.iter().skip(2).map(str::to_string).collect(),
        });
    }

    Ok(WideTable { year_headers, rows })
}
