//! Year × month-day pivot of observation values.

use std::collections::BTreeMap;

use anniv_series::Observation;
use chrono::Datelike;

/// Values summed per (`MM-DD`, year) cell.
///
/// Keys sort chronologically within a year because they are zero-padded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonalTable {
    cells: BTreeMap<String, BTreeMap<i32, f64>>,
    years: Vec<i32>,
}

impl SeasonalTable {
    /// Returns the sorted `MM-DD` row keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Returns the sorted column years.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the summed value for `key` in `year`, or `None` for a gap.
    pub fn cell(&self, key: &str, year: i32) -> Option<f64> {
        self.cells.get(key)?.get(&year).copied()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Renders the table as CSV: a `month_day,<year>...` header, one row per
    /// key, and empty fields for gaps.
    pub fn to_csv(&self) -> String {
        let header = std::iter::once("month_day".to_string())
            .chain(self.years.iter().map(i32::to_string))
            .collect::<Vec<_>>()
            .join(",");
        let mut out = header + "\n";
        for (key, row) in &self.cells {
            let fields: Vec<String> = self
                .years
                .iter()
                .map(|year| row.get(year).map(f64::to_string).unwrap_or_default())
                .collect();
            out.push_str(&format!("{key},{}\n", fields.join(",")));
        }
        out
    }
}

/// Groups `observations` by calendar day and year, summing duplicates.
pub fn seasonal_table(observations: &[Observation]) -> SeasonalTable {
    let mut cells: BTreeMap<String, BTreeMap<i32, f64>> = BTreeMap::new();
    let mut years: Vec<i32> = Vec::new();
    for obs in observations {
        let date = obs.date();
        let key = format!("{:02}-{:02}", date.month(), date.day());
        *cells.entry(key).or_default().entry(date.year()).or_insert(0.0) += obs.value();
        years.push(date.year());
    }
    years.sort_unstable();
    years.dedup();
    SeasonalTable { cells, years }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(y: i32, m: u32, d: u32, v: f64) -> Observation {
        Observation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), v)
    }

    #[test]
    fn test_sums_duplicates_and_sorts() {
        let table = seasonal_table(&[
            obs(2021, 3, 1, 5.0),
            obs(2020, 12, 31, 1.0),
            obs(2020, 3, 1, 2.0),
            obs(2020, 3, 1, 4.0),
        ]);
        assert_eq!(table.years(), &[2020, 2021]);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["03-01", "12-31"]);
        assert_eq!(table.cell("03-01", 2020), Some(6.0));
        assert_eq!(table.cell("03-01", 2021), Some(5.0));
        assert_eq!(table.cell("12-31", 2021), None);
        assert_eq!(table.cell("01-01", 2020), None);
    }

    #[test]
    fn test_csv_has_blank_gaps() {
        let table = seasonal_table(&[
            obs(2019, 2, 28, 1.5),
            obs(2020, 2, 29, 7.0),
        ]);
        assert_eq!(
            table.to_csv(),
            "month_day,2019,2020\n02-28,1.5,\n02-29,,7\n"
        );
    }

    #[test]
    fn test_empty_input() {
        let table = seasonal_table(&[]);
        assert!(table.is_empty());
        assert_eq!(table.to_csv(), "month_day\n");
    }
}
