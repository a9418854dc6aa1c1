//! SQL schema for the in-memory health database.

/// Identity columns followed by the thirteen metric columns, in
/// [`chr_core::Metric::ALL`] order. Shared by inserts and selects so row
/// positions line up.
pub const RECORD_COLUMNS: &str = "fips, county, state, year, \
    life_expectancy, premature_death, adult_obesity, adult_smoking, \
    physical_inactivity, diabetes, unemployment, poor_health, \
    excessive_drinking, hs_graduation, median_income, uninsured, \
    primary_care_rate";

/// Number of identity columns before the first metric column.
pub const METRIC_OFFSET: usize = 4;

/// Batch SQL for the `county_health` table and its indexes.
///
/// One row per (fips, year); a metric column is NULL when the source cell
/// was empty or non-numeric.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS county_health (
        fips TEXT NOT NULL,
        county TEXT NOT NULL,
        state TEXT NOT NULL,
        year INTEGER NOT NULL,
        life_expectancy REAL,
        premature_death REAL,
        adult_obesity REAL,
        adult_smoking REAL,
        physical_inactivity REAL,
        diabetes REAL,
        unemployment REAL,
        poor_health REAL,
        excessive_drinking REAL,
        hs_graduation REAL,
        median_income REAL,
        uninsured REAL,
        primary_care_rate REAL,
        PRIMARY KEY (fips, year)
    );
    CREATE INDEX IF NOT EXISTS idx_health_year ON county_health(year);
    CREATE INDEX IF NOT EXISTS idx_health_state ON county_health(state);
    "#
}
