//! Text reports over a loaded database.
//!
//! Each report returns its text so the commands only print it.

use chr_core::metric::group_thousands;
use chr_core::Metric;
use chr_data::stats::pearson;
use chr_db::Database;
use chr_view::Insights;
use std::fmt::Write;

/// Rows per year and, for each metric, how many carry a value.
pub fn coverage_report(db: &Database) -> anyhow::Result<String> {
    let coverage = db.query_coverage()?;
    let mut out = String::new();
    if coverage.is_empty() {
        writeln!(out, "No records.")?;
        return Ok(out);
    }
    for year in &coverage {
        writeln!(out, "{}: {} counties", year.year, group_thousands(year.rows as i64))?;
        for &metric in Metric::ALL.iter() {
            writeln!(
                out,
                "  {:<22} {:>6} ({:>5.1}%)",
                metric.key(),
                year.present_for(metric),
                year.percent(metric)
            )?;
        }
    }
    Ok(out)
}

/// The page's insights block for `metric` in `year`.
pub fn summary_report(db: &Database, metric: Metric, year: i32) -> anyhow::Result<String> {
    let records = db.query_records_for_year(year)?;
    Ok(Insights::build(&records, metric, year).to_text())
}

/// States with their county counts in the latest year.
pub fn states_report(db: &Database) -> anyhow::Result<String> {
    let mut out = String::new();
    let Some(year) = db.query_latest_year()? else {
        writeln!(out, "No records.")?;
        return Ok(out);
    };
    let states = db.query_states(year)?;
    writeln!(out, "{} states in {}:", states.len(), year)?;
    for state in &states {
        writeln!(out, "  {:<24} {:>5}", state.state, state.counties)?;
    }
    Ok(out)
}

/// Pearson correlation of every metric pair over counties that have both
/// values in `year`. Columns are numbered in row order; `-` marks a pair
/// with too few counties or no variance.
pub fn correlate_report(db: &Database, year: i32) -> anyhow::Result<String> {
    let mut out = String::new();
    write!(out, "{:<26}", format!("Correlations, {}", year))?;
    for i in 1..=Metric::ALL.len() {
        write!(out, "{:>6}", i)?;
    }
    writeln!(out)?;

    for (i, &a) in Metric::ALL.iter().enumerate() {
        write!(out, "{:>2} {:<23}", i + 1, a.key())?;
        for &b in Metric::ALL.iter() {
            let r = if a == b {
                Some(1.0)
            } else {
                pearson(&db.query_metric_pairs(a, b, year)?)
            };
            match r {
                Some(r) => write!(out, "{:>6.2}", r)?,
                None => write!(out, "{:>6}", "-")?,
            }
        }
        writeln!(out)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
fips,county,state,year,life_expectancy,adult_obesity,median_income
01001,Autauga,Alabama,2023,75.0,38.0,60000
01001,Autauga,Alabama,2024,76.0,37.0,62000
01003,Baldwin,Alabama,2024,78.0,33.0,
06037,Los Angeles,California,2024,80.0,29.0,76000
";

    fn db() -> Database {
        let db = Database::new().unwrap();
        db.load_health_csv(CSV).unwrap();
        db
    }

    #[test]
    fn coverage_lists_each_year() {
        let report = coverage_report(&db()).unwrap();
        assert!(report.starts_with("2023: 1 counties\n"));
        assert!(report.contains("2024: 3 counties\n"));
        assert!(report.contains("median_income"));
        assert!(report.contains("( 66.7%)"));
    }

    #[test]
    fn summary_matches_insights() {
        let report = summary_report(&db(), Metric::LifeExpectancy, 2024).unwrap();
        assert!(report.starts_with("Life Expectancy statistics for 2024:"));
        assert!(report.contains("Counties with data: 3"));

        let empty = summary_report(&db(), Metric::Diabetes, 2024).unwrap();
        assert_eq!(empty, "No data available for the selected filters.");
    }

    #[test]
    fn states_use_latest_year() {
        let report = states_report(&db()).unwrap();
        assert!(report.starts_with("2 states in 2024:"));
        assert!(report.contains("Alabama"));
        assert!(report.contains("California"));

        let empty = Database::new().unwrap();
        assert_eq!(states_report(&empty).unwrap(), "No records.\n");
    }

    #[test]
    fn correlation_matrix_has_a_row_per_metric() {
        let report = correlate_report(&db(), 2024).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 1 + Metric::ALL.len());
        // three counties: life expectancy rises as obesity falls
        let life = lines[1];
        assert!(life.contains("life_expectancy"));
        assert!(life.contains("  1.00"));
        assert!(life.contains(" -1.00"));
        // no values at all for diabetes
        assert!(lines[6].contains("diabetes"));
        assert!(lines[6].contains("-"));
    }
}
