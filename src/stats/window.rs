//! Windowed year-over-year change, shared by the growth columns and tables.

use super::MeanAcc;
use crate::enrich::LongRecord;
use std::collections::BTreeMap;

/// Percent change from `prev` to `cur`.
///
/// Missing on either side stays missing, and so does any non-finite result
/// such as a change from zero.
pub fn percent_change(prev: Option<f64>, cur: Option<f64>) -> Option<f64> {
    let (prev, cur) = (prev?, cur?);
    let rate = (cur - prev) / prev * 100.0;
    rate.is_finite().then_some(rate)
}

/// Per-key yearly growth of mean usage.
///
/// Two stages: first the mean usage for every `(key, year)` pair, then the
/// percent change along each key's ascending years. Rows whose key resolves
/// to `None` are left out entirely. A `(key, year)` pair whose values are all
/// missing still yields a row, and its missing mean also blanks the next
/// year's growth. Output is ordered by key, then year.
pub fn growth_over_years<K, F>(
    records: &[LongRecord],
    key_fn: F,
) -> Vec<(K, i32, Option<f64>)>
where
    K: Ord + Clone,
    F: Fn(&LongRecord) -> Option<K>,
{
    // 1) mean usage per (key, year)
    let mut means: BTreeMap<K, BTreeMap<i32, MeanAcc>> = BTreeMap::new();
    for rec in records {
        let Some(key) = key_fn(rec) else { continue };
        means
            .entry(key)
            .or_default()
            .entry(rec.year)
            .or_default()
            .push(rec.usage_percent);
    }

    // 2) percent change along each key's years
    let mut out = Vec::new();
    for (key, by_year) in &means {
        let mut prev: Option<f64> = None;
        for (&year, acc) in by_year {
            let mean = acc.mean();
            out.push((key.clone(), year, percent_change(prev, mean)));
            prev = mean;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(
        name: &str,
        continent: Option<&'static str>,
        year: i32,
        usage: Option<f64>,
    ) -> LongRecord {
        LongRecord {
            country_name: name.to_string(),
            country_code: String::new(),
            year,
            usage_percent: usage,
            growth_rate_percent: None,
            continent,
        }
    }

    #[test]
    fn percent_change_basics() {
        assert_eq!(percent_change(Some(10.0), Some(20.0)), Some(100.0));
        assert_eq!(percent_change(Some(20.0), Some(10.0)), Some(-50.0));
        assert_eq!(percent_change(None, Some(10.0)), None);
        assert_eq!(percent_change(Some(10.0), None), None);
        assert_eq!(percent_change(None, None), None);
    }

    #[test]
    fn percent_change_from_zero_is_missing() {
        assert_eq!(percent_change(Some(0.0), Some(5.0)), None);
        assert_eq!(percent_change(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn means_are_taken_before_the_change() {
        let records = vec![
            rec("A", Some("Europe"), 2000, Some(10.0)),
            rec("B", Some("Europe"), 2000, Some(30.0)),
            rec("A", Some("Europe"), 2001, Some(30.0)),
            rec("B", Some("Europe"), 2001, Some(30.0)),
        ];
        let rows = growth_over_years(&records, |r| r.continent);
        // mean 20 in 2000, mean 30 in 2001
        assert_eq!(
            rows,
            vec![("Europe", 2000, None), ("Europe", 2001, Some(50.0))]
        );
    }

    #[test]
    fn all_missing_year_keeps_its_row_and_blanks_the_next() {
        let records = vec![
            rec("A", Some("Europe"), 2000, Some(10.0)),
            rec("A", Some("Europe"), 2001, None),
            rec("A", Some("Europe"), 2002, Some(20.0)),
        ];
        let rows = growth_over_years(&records, |r| r.continent);
        assert_eq!(
            rows,
            vec![
                ("Europe", 2000, None),
                ("Europe", 2001, None),
                ("Europe", 2002, None),
            ]
        );
    }

    #[test]
    fn unkeyed_rows_are_left_out() {
        let records = vec![
            rec("World", None, 2000, Some(40.0)),
            rec("A", Some("Asia"), 2000, Some(10.0)),
            rec("World", None, 2001, Some(45.0)),
            rec("A", Some("Asia"), 2001, Some(15.0)),
        ];
        let rows = growth_over_years(&records, |r| r.continent);
        assert_eq!(
            rows,
            vec![("Asia", 2000, None), ("Asia", 2001, Some(50.0))]
        );
    }

    #[test]
    fn keys_and_years_come_out_sorted() {
        let records = vec![
            rec("B", Some("Oceania"), 2001, Some(10.0)),
            rec("A", Some("Africa"), 2001, Some(10.0)),
            rec("B", Some("Oceania"), 2000, Some(10.0)),
            rec("A", Some("Africa"), 2000, Some(10.0)),
        ];
        let rows = growth_over_years(&records, |r| r.continent);
        let order: Vec<(&str, i32)> = rows.iter().map(|(k, y, _)| (*k, *y)).collect();
        assert_eq!(
            order,
            vec![
                ("Africa", 2000),
                ("Africa", 2001),
                ("Oceania", 2000),
                ("Oceania", 2001),
            ]
        );
    }
}
