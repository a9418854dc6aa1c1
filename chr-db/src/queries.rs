//! Typed query methods over the `county_health` table.
//!
//! Metric column names come from [`Metric::key`], a fixed set of
//! identifiers, so they are interpolated into SQL directly; every
//! user-derived value is bound as a parameter.

use crate::models::{StateCount, YearCoverage};
use crate::schema::{METRIC_OFFSET, RECORD_COLUMNS};
use crate::Database;
use chr_core::{CountyYearRecord, Metric};
use rusqlite::{params, OptionalExtension, Row};

/// Build a record from a row selected with [`RECORD_COLUMNS`].
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<CountyYearRecord> {
    let mut record = CountyYearRecord::new(
        row.get::<_, String>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, i32>(3)?,
    );
    for (i, &metric) in Metric::ALL.iter().enumerate() {
        record.set(metric, row.get::<_, Option<f64>>(METRIC_OFFSET + i)?);
    }
    Ok(record)
}

impl Database {
    /// Total number of county-year rows.
    pub fn record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM county_health", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// All records of one year, ordered by fips.
    pub fn query_records_for_year(&self, year: i32) -> anyhow::Result<Vec<CountyYearRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM county_health WHERE year = ?1 ORDER BY fips",
            RECORD_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![year], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[chr] query: query_records_for_year({}) returned {} records",
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// The record for one county in one year, if present.
    pub fn query_county_year(&self, fips: &str, year: i32) -> anyhow::Result<Option<CountyYearRecord>> {
        let conn = self.conn.borrow();
        let record = conn
            .query_row(
                &format!(
                    "SELECT {} FROM county_health WHERE fips = ?1 AND year = ?2",
                    RECORD_COLUMNS
                ),
                params![fips, year],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Every year of one county, oldest first.
    pub fn query_county_history(&self, fips: &str) -> anyhow::Result<Vec<CountyYearRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM county_health WHERE fips = ?1 ORDER BY year",
            RECORD_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![fips], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Distinct years present, ascending.
    pub fn query_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM county_health ORDER BY year")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    pub fn query_latest_year(&self) -> anyhow::Result<Option<i32>> {
        let conn = self.conn.borrow();
        let year: Option<i32> =
            conn.query_row("SELECT MAX(year) FROM county_health", [], |row| row.get(0))?;
        Ok(year)
    }

    /// Non-null values of `metric` in `year`.
    pub fn query_metric_values(&self, metric: Metric, year: i32) -> anyhow::Result<Vec<f64>> {
        let conn = self.conn.borrow();
        let column = metric.key();
        let mut stmt = conn.prepare(&format!(
            "SELECT {column} FROM county_health WHERE year = ?1 AND {column} IS NOT NULL"
        ))?;
        let values = stmt
            .query_map(params![year], |row| row.get(0))?
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(values)
    }

    /// Rows of `year` where both metrics are present, as `(a, b)` pairs.
    pub fn query_metric_pairs(&self, a: Metric, b: Metric, year: i32) -> anyhow::Result<Vec<(f64, f64)>> {
        let conn = self.conn.borrow();
        let (ca, cb) = (a.key(), b.key());
        let mut stmt = conn.prepare(&format!(
            "SELECT {ca}, {cb} FROM county_health
             WHERE year = ?1 AND {ca} IS NOT NULL AND {cb} IS NOT NULL"
        ))?;
        let pairs = stmt
            .query_map(params![year], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<(f64, f64)>, _>>()?;
        Ok(pairs)
    }

    /// Per-year row counts and per-metric non-null counts, oldest year first.
    pub fn query_coverage(&self) -> anyhow::Result<Vec<YearCoverage>> {
        let conn = self.conn.borrow();
        let counts: Vec<String> = Metric::ALL
            .iter()
            .map(|m| format!("COUNT({})", m.key()))
            .collect();
        let mut stmt = conn.prepare(&format!(
            "SELECT year, COUNT(*), {} FROM county_health GROUP BY year ORDER BY year",
            counts.join(", ")
        ))?;
        let rows = stmt
            .query_map([], |row| {
                let mut present = Vec::with_capacity(Metric::ALL.len());
                for (i, &metric) in Metric::ALL.iter().enumerate() {
                    present.push((metric, row.get::<_, i64>(2 + i)? as usize));
                }
                Ok(YearCoverage {
                    year: row.get(0)?,
                    rows: row.get::<_, i64>(1)? as usize,
                    present,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Distinct states with their county counts in `year`, alphabetical.
    pub fn query_states(&self, year: i32) -> anyhow::Result<Vec<StateCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, COUNT(*) FROM county_health
             WHERE year = ?1
             GROUP BY state
             ORDER BY state",
        )?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok(StateCount {
                    state: row.get(0)?,
                    counties: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
