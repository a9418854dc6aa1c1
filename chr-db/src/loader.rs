//! Loading county-year records into the database.
//!
//! Records arrive either as health CSV text (see
//! [`chr_core::record::parse_health_csv`] for the format) or as already
//! built records, e.g. the demo-mode dataset.

use crate::models::DataSource;
use crate::schema::{METRIC_OFFSET, RECORD_COLUMNS};
use crate::Database;
use chr_core::record::parse_health_csv;
use chr_core::{CountyYearRecord, Metric};
use chr_data::demo;
use rusqlite::types::Value;

impl Database {
    /// Parse a health CSV and insert every row.
    ///
    /// Returns the number of rows inserted. A duplicate `(fips, year)` pair
    /// replaces the earlier row.
    ///
    /// # Example CSV
    /// ```text
    /// fips,county,state,year,life_expectancy,adult_obesity
    /// 01001,Autauga,Alabama,2024,75.8,38.1
    /// ```
    pub fn load_health_csv(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = parse_health_csv(csv_data)?;
        self.insert_records(&records)
    }

    /// Insert records in a single transaction.
    pub fn insert_records(&self, records: &[CountyYearRecord]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let placeholders: Vec<String> =
                (1..=METRIC_OFFSET + Metric::ALL.len()).map(|i| format!("?{}", i)).collect();
            let sql = format!(
                "INSERT OR REPLACE INTO county_health ({}) VALUES ({})",
                RECORD_COLUMNS,
                placeholders.join(", ")
            );
            let mut stmt = tx.prepare(&sql)?;

            for record in records {
                let mut values: Vec<Value> = vec![
                    Value::Text(record.fips.clone()),
                    Value::Text(record.county.clone()),
                    Value::Text(record.state.clone()),
                    Value::Integer(record.year as i64),
                ];
                values.extend(Metric::ALL.iter().map(|&m| match record.value(m) {
                    Some(v) => Value::Real(v),
                    None => Value::Null,
                }));
                stmt.execute(rusqlite::params_from_iter(values))?;
            }
        }
        tx.commit()?;
        log::info!("[chr] loader: inserted {} county-year records", records.len());
        Ok(records.len())
    }

    /// Load the fetched health CSV, or fall back to the demo dataset when the
    /// fetch failed (`Err` carries the reason) or the text does not parse.
    pub fn load_health_or_demo(&self, fetched: Result<String, String>, seed: u64) -> anyhow::Result<DataSource> {
        let reason = match fetched {
            Ok(csv_data) => match self.load_health_csv(&csv_data) {
                Ok(rows) => return Ok(DataSource::Loaded { rows }),
                Err(e) => format!("{:#}", e),
            },
            Err(reason) => reason,
        };
        log::warn!("[chr] loader: health data unavailable ({}), using demo data", reason);
        self.insert_records(&demo::generate(seed))?;
        Ok(DataSource::Demo { reason })
    }
}
