//! Aggregate tables over the long-format records.
//!
//! Every function here is a pure fold over `&[LongRecord]`. Grouped results
//! come out sorted by their group key, and groups keyed by a missing
//! continent are excluded up front. Missing usage values never contribute to
//! a statistic, but a group made entirely of missing values still gets a row
//! with a missing result (except sums, which come out as zero).

pub mod window;

use crate::enrich::LongRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// How many countries the ranked table keeps.
pub const TOP_COUNTRIES: usize = 10;

/// Running mean over optional values. Missing values leave it untouched.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    pub(crate) fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyAverage {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Average Internet Usage (%)")]
    pub average_usage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMedian {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Median Internet Usage (%)")]
    pub median_usage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryStdDev {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Standard Deviation of Internet Usage (%)")]
    pub std_dev_usage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentTotal {
    #[serde(rename = "Continent")]
    pub continent: &'static str,
    #[serde(rename = "Total Internet Usage (%)")]
    pub total_usage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentYearlyGrowth {
    #[serde(rename = "Continent")]
    pub continent: &'static str,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Yearly Growth Rate (%)")]
    pub growth_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryYearlyGrowth {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Yearly Growth Rate (%)")]
    pub growth_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryAverage {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Average Internet Usage (%)")]
    pub average_usage: Option<f64>,
}

/// One country code that never resolved to a continent, with how many
/// long-format rows it covers. Diagnostic only, never written to CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmappedCountry {
    pub country_name: String,
    pub country_code: String,
    pub records: usize,
}

/// Mean usage across all countries, per year.
pub fn average_usage_per_year(records: &[LongRecord]) -> Vec<YearlyAverage> {
    let mut by_year: BTreeMap<i32, MeanAcc> = BTreeMap::new();
    for rec in records {
        by_year.entry(rec.year).or_default().push(rec.usage_percent);
    }
    by_year
        .into_iter()
        .map(|(year, acc)| YearlyAverage {
            year,
            average_usage: acc.mean(),
        })
        .collect()
}

/// Median usage per country, midpoint of the two middle values for even
/// counts.
pub fn median_usage_per_country(records: &[LongRecord]) -> Vec<CountryMedian> {
    let mut by_country: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for rec in records {
        let values = by_country.entry(rec.country_name.clone()).or_default();
        if let Some(v) = rec.usage_percent {
            values.push(v);
        }
    }
    by_country
        .into_iter()
        .map(|(country_name, mut values)| CountryMedian {
            median_usage: median(&mut values),
            country_name,
        })
        .collect()
}

/// Sample standard deviation of usage per country. Countries with fewer than
/// two present values get a missing result.
pub fn std_dev_usage_per_country(records: &[LongRecord]) -> Vec<CountryStdDev> {
    let mut by_country: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for rec in records {
        let values = by_country.entry(rec.country_name.clone()).or_default();
        if let Some(v) = rec.usage_percent {
            values.push(v);
        }
    }
    by_country
        .into_iter()
        .map(|(country_name, values)| CountryStdDev {
            std_dev_usage: sample_std_dev(&values),
            country_name,
        })
        .collect()
}

/// Total usage per continent. Rows without a continent are excluded, and a
/// continent whose values are all missing totals zero.
pub fn total_usage_per_continent(records: &[LongRecord]) -> Vec<ContinentTotal> {
    let mut by_continent: BTreeMap<&'static str, f64> = BTreeMap::new();
    for rec in records {
        let Some(continent) = rec.continent else {
            continue;
        };
        *by_continent.entry(continent).or_insert(0.0) += rec.usage_percent.unwrap_or(0.0);
    }
    by_continent
        .into_iter()
        .map(|(continent, total_usage)| ContinentTotal {
            continent,
            total_usage,
        })
        .collect()
}

/// Yearly growth of each continent's mean usage.
pub fn yearly_growth_per_continent(records: &[LongRecord]) -> Vec<ContinentYearlyGrowth> {
    window::growth_over_years(records, |rec| rec.continent)
        .into_iter()
        .map(|(continent, year, growth_rate)| ContinentYearlyGrowth {
            continent,
            year,
            growth_rate,
        })
        .collect()
}

/// Yearly growth of each country's mean usage.
pub fn yearly_growth_per_country(records: &[LongRecord]) -> Vec<CountryYearlyGrowth> {
    window::growth_over_years(records, |rec| Some(rec.country_name.clone()))
        .into_iter()
        .map(|(country_name, year, growth_rate)| CountryYearlyGrowth {
            country_name,
            year,
            growth_rate,
        })
        .collect()
}

/// Mean usage per country across all its years.
pub fn average_usage_per_country(records: &[LongRecord]) -> Vec<CountryAverage> {
    let mut by_country: BTreeMap<String, MeanAcc> = BTreeMap::new();
    for rec in records {
        by_country
            .entry(rec.country_name.clone())
            .or_default()
            .push(rec.usage_percent);
    }
    by_country
        .into_iter()
        .map(|(country_name, acc)| CountryAverage {
            average_usage: acc.mean(),
            country_name,
        })
        .collect()
}

/// The highest-averaging countries, ranked descending.
///
/// The sort is stable, so equal averages keep their incoming (alphabetical)
/// order. Countries whose average is missing rank behind every defined one
/// and only surface when fewer than ten countries have data at all.
pub fn top_countries(averages: &[CountryAverage]) -> Vec<CountryAverage> {
    let mut ranked = averages.to_vec();
    ranked.sort_by(|a, b| match (a.average_usage, b.average_usage) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked.truncate(TOP_COUNTRIES);
    ranked
}

/// Country codes with no continent mapping, deduplicated in first-seen order
/// with a row count each.
pub fn unmapped_countries(records: &[LongRecord]) -> Vec<UnmappedCountry> {
    let mut unmapped: Vec<UnmappedCountry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for rec in records {
        if rec.continent.is_some() {
            continue;
        }
        match index.entry(rec.country_code.as_str()) {
            Entry::Occupied(slot) => unmapped[*slot.get()].records += 1,
            Entry::Vacant(slot) => {
                slot.insert(unmapped.len());
                unmapped.push(UnmappedCountry {
                    country_name: rec.country_name.clone(),
                    country_code: rec.country_code.clone(),
                    records: 1,
                });
            }
        }
    }
    unmapped
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    Some(if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    })
}

fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}
