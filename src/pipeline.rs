//! End-to-end composition of the pipeline stages.
//!
//! Read the wide CSV, drop incomplete countries, reshape to long format,
//! derive the usage, growth and continent columns, then fold the aggregate
//! tables. Every stage hands a fresh value to the next, so re-running over
//! the same input file reproduces the same `PipelineRun` exactly.

use crate::enrich::{self, LongRecord};
use crate::ingest::{self, WideTable};
use crate::reshape;
use crate::stats::{
    self, ContinentTotal, ContinentYearlyGrowth, CountryAverage, CountryMedian, CountryStdDev,
    CountryYearlyGrowth, UnmappedCountry, YearlyAverage,
};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub cleaned: WideTable,
    pub long_records: Vec<LongRecord>,
    pub average_per_year: Vec<YearlyAverage>,
    pub median_per_country: Vec<CountryMedian>,
    pub std_dev_per_country: Vec<CountryStdDev>,
    pub total_per_continent: Vec<ContinentTotal>,
    pub growth_per_continent: Vec<ContinentYearlyGrowth>,
    pub growth_per_country: Vec<CountryYearlyGrowth>,
    pub average_per_country: Vec<CountryAverage>,
    pub top_countries: Vec<CountryAverage>,
    pub unmapped: Vec<UnmappedCountry>,
}

/// Run the whole pipeline over one wide-format CSV.
#[tracing::instrument(level = "info", skip(input), fields(path = %input.as_ref().display()))]
pub fn run<P: AsRef<Path>>(input: P) -> Result<PipelineRun> {
    let table = ingest::read_wide_csv(&input)?;
    let cleaned = reshape::drop_incomplete(table);
    let observations = reshape::to_long(&cleaned)?;
    let long_records = enrich::derive_columns(observations);
    Ok(aggregate(cleaned, long_records))
}

fn aggregate(cleaned: WideTable, long_records: Vec<LongRecord>) -> PipelineRun {
    let average_per_country = stats::average_usage_per_country(&long_records);
    let top_countries = stats::top_countries(&average_per_country);
    let run = PipelineRun {
        average_per_year: stats::average_usage_per_year(&long_records),
        median_per_country: stats::median_usage_per_country(&long_records),
        std_dev_per_country: stats::std_dev_usage_per_country(&long_records),
        total_per_continent: stats::total_usage_per_continent(&long_records),
        growth_per_continent: stats::yearly_growth_per_continent(&long_records),
        growth_per_country: stats::yearly_growth_per_country(&long_records),
        unmapped: stats::unmapped_countries(&long_records),
        average_per_country,
        top_countries,
        cleaned,
        long_records,
    };
    info!(
        countries = run.average_per_country.len(),
        years = run.average_per_year.len(),
        unmapped = run.unmapped.len(),
        "aggregated all summary tables"
    );
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::table;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    const FIXTURE: &str = "\
Country Name,Country Code,2018,2019,2020
Aruba,ABW,80,85,90
Brazil,BRA,60,65,70
World,WLD,40,45,50
Incomplete,XYZ,10,,30
";

    fn fixture(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("input.csv");
        fs::write(&path, content).unwrap();
        path
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn incomplete_countries_never_reach_the_long_format() {
        let dir = tempdir().unwrap();
        let run = run(fixture(&dir, FIXTURE)).unwrap();

        assert_eq!(run.cleaned.rows.len(), 3);
        assert_eq!(run.long_records.len(), 9);
        let names: Vec<&str> = run
            .long_records
            .iter()
            .map(|r| r.country_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Aruba", "Aruba", "Aruba", "Brazil", "Brazil", "Brazil", "World", "World",
                "World",
            ]
        );
        assert!(run.long_records.iter().all(|r| r.usage_percent.is_some()));
    }

    #[test]
    fn yearly_averages_are_exact() {
        let dir = tempdir().unwrap();
        let run = run(fixture(&dir, FIXTURE)).unwrap();
        assert_eq!(
            run.average_per_year,
            vec![
                YearlyAverage { year: 2018, average_usage: Some(60.0) },
                YearlyAverage { year: 2019, average_usage: Some(65.0) },
                YearlyAverage { year: 2020, average_usage: Some(70.0) },
            ]
        );
    }

    #[test]
    fn per_country_growth_follows_each_country_alone() {
        let dir = tempdir().unwrap();
        let run = run(fixture(&dir, FIXTURE)).unwrap();

        let aruba: Vec<Option<f64>> = run
            .growth_per_country
            .iter()
            .filter(|g| g.country_name == "Aruba")
            .map(|g| g.growth_rate)
            .collect();
        assert_eq!(aruba[0], None);
        assert_eq!(aruba[1], Some(6.25));
        assert!(approx(aruba[2].unwrap(), 5.0 / 85.0 * 100.0));
    }

    #[test]
    fn continent_tables_leave_out_unmapped_codes() {
        let dir = tempdir().unwrap();
        let run = run(fixture(&dir, FIXTURE)).unwrap();

        assert_eq!(
            run.total_per_continent,
            vec![
                ContinentTotal { continent: "North America", total_usage: 255.0 },
                ContinentTotal { continent: "South America", total_usage: 195.0 },
            ]
        );
        assert!(run
            .growth_per_continent
            .iter()
            .all(|g| g.continent == "North America" || g.continent == "South America"));
        assert_eq!(run.unmapped.len(), 1);
        assert_eq!(run.unmapped[0].country_code, "WLD");
        assert_eq!(run.unmapped[0].records, 3);
    }

    #[test]
    fn ranking_puts_the_highest_average_first() {
        let dir = tempdir().unwrap();
        let run = run(fixture(&dir, FIXTURE)).unwrap();
        let order: Vec<&str> = run
            .top_countries
            .iter()
            .map(|c| c.country_name.as_str())
            .collect();
        assert_eq!(order, vec!["Aruba", "Brazil", "World"]);
        assert_eq!(run.top_countries[0].average_usage, Some(85.0));
    }

    #[test]
    fn grouped_growth_agrees_with_the_per_record_column() {
        let dir = tempdir().unwrap();
        let run = run(fixture(&dir, FIXTURE)).unwrap();

        // one record per (country, year), so the two-stage table must land
        // on the same numbers as the per-record growth column
        for rec in &run.long_records {
            let table_rate = run
                .growth_per_country
                .iter()
                .find(|g| g.country_name == rec.country_name && g.year == rec.year)
                .map(|g| g.growth_rate);
            assert_eq!(table_rate, Some(rec.growth_rate_percent));
        }
    }

    #[test]
    fn reruns_reproduce_the_same_output() {
        let dir = tempdir().unwrap();
        let path = fixture(&dir, FIXTURE);
        let first = run(&path).unwrap();
        let second = run(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn write_all_produces_every_table() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let run = run(fixture(&dir, FIXTURE)).unwrap();
        table::write_all(&run, &out).unwrap();

        for name in [
            table::CLEANED_WIDE,
            table::LONG_FORMAT,
            table::AVERAGE_PER_YEAR,
            table::MEDIAN_PER_COUNTRY,
            table::STD_DEV_PER_COUNTRY,
            table::TOTAL_PER_CONTINENT,
            table::GROWTH_PER_CONTINENT,
            table::GROWTH_PER_COUNTRY,
            table::TOP_COUNTRIES,
        ] {
            assert!(out.join(name).exists(), "missing output file {}", name);
        }

        let averages = fs::read_to_string(out.join(table::AVERAGE_PER_YEAR)).unwrap();
        assert_eq!(
            averages,
            "Year,Average Internet Usage (%)\n2018,60.0\n2019,65.0\n2020,70.0\n"
        );
    }

    #[test]
    fn a_malformed_year_header_fails_the_run() {
        let dir = tempdir().unwrap();
        let path = fixture(
            &dir,
            "Country Name,Country Code,Year One\nAruba,ABW,80\n",
        );
        let err = run(&path).unwrap_err();
        assert!(err.to_string().contains("malformed year column"));
    }

    #[test]
    fn a_missing_input_file_fails_the_run() {
        let dir = tempdir().unwrap();
        assert!(run(dir.path().join("absent.csv")).is_err());
    }
}
