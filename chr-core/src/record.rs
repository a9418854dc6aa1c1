//! County-year health records and the health CSV format.
//!
//! # CSV Format
//!
//! Header row required. `fips,county,state,year` must be present; any of the
//! thirteen metric columns (see [`Metric::key`]) may follow in any order.
//! Unknown columns are ignored.
//!
//! ```text
//! fips,county,state,year,life_expectancy,median_income
//! 06037,Los Angeles,California,2024,81.4,83411
//! ```

use crate::metric::Metric;
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::Write;

/// Health metrics for one county in one year.
///
/// Metric values are either finite numbers or absent; [`CountyYearRecord::set`]
/// drops NaN and infinities.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyYearRecord {
    pub fips: String,
    pub county: String,
    pub state: String,
    pub year: i32,
    values: [Option<f64>; 13],
}

impl CountyYearRecord {
    pub fn new(fips: impl Into<String>, county: impl Into<String>, state: impl Into<String>, year: i32) -> Self {
        Self {
            fips: normalize_fips(&fips.into()),
            county: county.into(),
            state: state.into(),
            year,
            values: [None; 13],
        }
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values[metric.index()]
    }

    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        self.values[metric.index()] = value.filter(|v| v.is_finite());
    }

    /// Builder-style [`CountyYearRecord::set`].
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, Some(value));
        self
    }

    pub fn has_any_value(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }
}

/// Parse a numeric cell: empty, non-numeric and non-finite cells are `None`.
pub fn parse_or_null(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Zero-pad purely numeric ids shorter than five digits (`"1001"` -> `"01001"`).
pub fn normalize_fips(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.len() < 5 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("{:0>5}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Column positions resolved from the header row.
struct Columns {
    fips: usize,
    county: usize,
    state: usize,
    year: usize,
    metrics: Vec<(Metric, usize)>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required = |name: &str| {
            find(name).with_context(|| format!("health CSV is missing required column '{}'", name))
        };
        Ok(Self {
            fips: required("fips")?,
            county: required("county")?,
            state: required("state")?,
            year: required("year")?,
            metrics: Metric::ALL
                .iter()
                .filter_map(|&m| find(m.key()).map(|i| (m, i)))
                .collect(),
        })
    }
}

/// Parse the health CSV into records, one per data row.
///
/// Fails only when the header is unusable or the CSV itself is malformed.
/// Rows without a parseable year are skipped with a warning.
pub fn parse_health_csv(csv_data: &str) -> anyhow::Result<Vec<CountyYearRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = Columns::from_headers(rdr.headers()?)?;
    log::info!(
        "[chr] record: header has {} of {} metric columns",
        columns.metrics.len(),
        Metric::ALL.len()
    );

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let row = result.context("malformed health CSV row")?;
        let cell = |i: usize| row.get(i).unwrap_or("").trim();

        let year = match cell(columns.year).parse::<i32>() {
            Ok(y) => y,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let mut record =
            CountyYearRecord::new(cell(columns.fips), cell(columns.county), cell(columns.state), year);
        for &(metric, i) in &columns.metrics {
            record.set(metric, parse_or_null(cell(i)));
        }
        records.push(record);
    }

    if skipped > 0 {
        log::warn!("[chr] record: skipped {} rows with an unparseable year", skipped);
    }
    log::info!("[chr] record: parsed {} county-year records", records.len());
    Ok(records)
}

/// Write records as a health CSV with all thirteen metric columns.
pub fn write_health_csv<W: Write>(records: &[CountyYearRecord], writer: W) -> anyhow::Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    let mut header = vec!["fips", "county", "state", "year"];
    header.extend(Metric::ALL.iter().map(|m| m.key()));
    wtr.write_record(&header)?;

    for record in records {
        let mut row = vec![
            record.fips.clone(),
            record.county.clone(),
            record.state.clone(),
            record.year.to_string(),
        ];
        row.extend(
            Metric::ALL
                .iter()
                .map(|&m| record.value(m).map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_row_with_one_metric() {
        let csv_data = "\
fips,county,state,year,life_expectancy
00001,Test,Texas,2024,78.4
";
        let records = parse_health_csv(csv_data).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.fips, "00001");
        assert_eq!(r.county, "Test");
        assert_eq!(r.state, "Texas");
        assert_eq!(r.year, 2024);
        assert_eq!(r.value(Metric::LifeExpectancy), Some(78.4));
        for metric in Metric::ALL.iter().skip(1) {
            assert_eq!(r.value(*metric), None);
        }
    }

    #[test]
    fn unparseable_cells_become_null() {
        let csv_data = "\
fips,county,state,year,adult_obesity,diabetes,median_income,uninsured
01001,Autauga,Alabama,2023,abc,,NaN,12.5
";
        let records = parse_health_csv(csv_data).unwrap();
        let r = &records[0];
        assert_eq!(r.value(Metric::AdultObesity), None);
        assert_eq!(r.value(Metric::Diabetes), None);
        assert_eq!(r.value(Metric::MedianIncome), None);
        assert_eq!(r.value(Metric::Uninsured), Some(12.5));
    }

    #[test]
    fn every_value_is_finite_or_absent() {
        let csv_data = "\
fips,county,state,year,life_expectancy,premature_death,unemployment
01001,Autauga,Alabama,2023,inf,-inf,NaN
01003,Baldwin,Alabama,2023,79.1,x,4.2
";
        for record in parse_health_csv(csv_data).unwrap() {
            for metric in Metric::ALL {
                if let Some(v) = record.value(metric) {
                    assert!(v.is_finite());
                }
            }
        }
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let csv_data = "\
median_income,year,state,county,fips
65000,2022,Ohio,Franklin,39049
";
        let records = parse_health_csv(csv_data).unwrap();
        assert_eq!(records[0].fips, "39049");
        assert_eq!(records[0].year, 2022);
        assert_eq!(records[0].value(Metric::MedianIncome), Some(65000.0));
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv_data = "fips,county,year\n01001,Autauga,2023\n";
        let err = parse_health_csv(csv_data).unwrap_err();
        assert!(err.to_string().contains("state"));
    }

    #[test]
    fn rows_with_bad_year_are_skipped() {
        let csv_data = "\
fips,county,state,year
01001,Autauga,Alabama,twenty
01003,Baldwin,Alabama,2021
";
        let records = parse_health_csv(csv_data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fips, "01003");
    }

    #[test]
    fn short_numeric_fips_is_padded() {
        assert_eq!(normalize_fips("1001"), "01001");
        assert_eq!(normalize_fips(" 6037 "), "06037");
        assert_eq!(normalize_fips("48201"), "48201");
        assert_eq!(normalize_fips("AK-01"), "AK-01");
    }

    #[test]
    fn set_drops_non_finite() {
        let mut r = CountyYearRecord::new("01001", "Autauga", "Alabama", 2020);
        r.set(Metric::Diabetes, Some(f64::NAN));
        assert_eq!(r.value(Metric::Diabetes), None);
        assert!(!r.has_any_value());
        r.set(Metric::Diabetes, Some(11.0));
        assert!(r.has_any_value());
    }

    #[test]
    fn written_csv_parses_back() {
        let records = vec![
            CountyYearRecord::new("06037", "Los Angeles", "California", 2024)
                .with(Metric::LifeExpectancy, 81.4)
                .with(Metric::MedianIncome, 83411.0),
            CountyYearRecord::new("48201", "Harris", "Texas", 2024),
        ];
        let mut buf = Vec::new();
        write_health_csv(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("fips,county,state,year,life_expectancy,"));
        assert_eq!(parse_health_csv(&text).unwrap(), records);
    }
}
