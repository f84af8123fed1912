//! Derived columns for the long-format table.
//!
//! Takes the reshaped observations and produces the final per-row records:
//! usage coerced to a number (or missing), year-over-year growth per country,
//! and a continent name resolved from the ISO code.

pub mod continent;

use crate::reshape::Observation;
use crate::stats::window::percent_change;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

/// One row of the long-format table.
///
/// `None` in any optional column serializes as an empty CSV field. The
/// `continent` column borrows from the static reference table, so no
/// per-row allocation happens for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRecord {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Country Code")]
    pub country_code: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Internet Usage (%)")]
    pub usage_percent: Option<f64>,
    #[serde(rename = "Internet Usage Growth Rate (%)")]
    pub growth_rate_percent: Option<f64>,
    #[serde(rename = "Continent")]
    pub continent: Option<&'static str>,
}

/// Parse a raw cell into a usage value, treating anything non-numeric or
/// non-finite as missing.
fn coerce_usage(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Attach the derived columns to every observation.
///
/// Row order is preserved exactly. Growth is computed per country over its
/// years in ascending order: the earliest year has no prior value and stays
/// missing, as does any year whose own or prior usage is missing, and any
/// division by a zero prior.
pub fn derive_columns(observations: Vec<Observation>) -> Vec<LongRecord> {
    // 1) coerce usage and resolve continents row by row
    let mut records: Vec<LongRecord> = observations
        .into_iter()
        .map(|obs| LongRecord {
            usage_percent: coerce_usage(&obs.raw_usage),
            continent: continent::classify(&obs.country_code),
            country_name: obs.country_name,
            country_code: obs.country_code,
            year: obs.year,
            growth_rate_percent: None,
        })
        .collect();

    // 2) group row indices by country, keeping first-seen group order
    let mut groups: Vec<Vec<usize>> = Vec::new();
    {
        let mut slot_by_name: HashMap<&str, usize> = HashMap::new();
        for (idx, rec) in records.iter().enumerate() {
            let slot = *slot_by_name
                .entry(rec.country_name.as_str())
                .or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                });
            groups[slot].push(idx);
        }
    }

    // 3) walk each country's rows in year order and fill in growth
    for group in &mut groups {
        group.sort_by_key(|&idx| records[idx].year);
    }
    for group in &groups {
        for pair in group.windows(2) {
            let prev = records[pair[0]].usage_percent;
            let cur = records[pair[1]].usage_percent;
            records[pair[1]].growth_rate_percent = percent_change(prev, cur);
        }
    }

    info!(
        records = records.len(),
        countries = groups.len(),
        "derived usage, growth and continent columns"
    );
    records
}
