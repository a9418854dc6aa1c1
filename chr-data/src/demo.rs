//! Synthetic placeholder dataset for demo mode.
//!
//! Used when the real health table cannot be loaded, and by `chr-cli sample`.
//! Shape is fixed (years, counties, states); values are independent uniform
//! draws per metric from a seeded RNG, so a given seed always produces the
//! same dataset.

use chr_core::{CountyYearRecord, Metric};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const FIRST_YEAR: i32 = 2014;
pub const LAST_YEAR: i32 = 2024;
pub const COUNTY_COUNT: usize = 100;
pub const STATES: [&str; 5] = ["California", "Texas", "Florida", "New York", "Pennsylvania"];

/// Uniform range `[low, low + span)` for each metric.
fn value_range(metric: Metric) -> (f64, f64) {
    match metric {
        Metric::LifeExpectancy => (70.0, 15.0),
        Metric::PrematureDeath => (2000.0, 8000.0),
        Metric::AdultObesity => (20.0, 25.0),
        Metric::AdultSmoking => (8.0, 22.0),
        Metric::PhysicalInactivity => (15.0, 20.0),
        Metric::Diabetes => (8.0, 10.0),
        Metric::Unemployment => (2.0, 10.0),
        Metric::PoorHealth => (10.0, 20.0),
        Metric::ExcessiveDrinking => (10.0, 15.0),
        Metric::HsGraduation => (70.0, 25.0),
        Metric::MedianIncome => (30000.0, 60000.0),
        Metric::Uninsured => (5.0, 20.0),
        Metric::PrimaryCareRate => (20.0, 80.0),
    }
}

/// Placeholder fips for county `i`: `01000`, `01001`, ...
pub fn demo_fips(i: usize) -> String {
    format!("{:05}", 1000 + i)
}

/// Generate the full demo dataset: every county for every year.
pub fn generate(seed: u64) -> Vec<CountyYearRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(COUNTY_COUNT * (LAST_YEAR - FIRST_YEAR + 1) as usize);

    for year in FIRST_YEAR..=LAST_YEAR {
        for i in 0..COUNTY_COUNT {
            let mut record = CountyYearRecord::new(
                demo_fips(i),
                format!("County {}", i),
                STATES[i % STATES.len()],
                year,
            );
            for metric in Metric::ALL {
                let (low, span) = value_range(metric);
                record.set(metric, Some(low + rng.random::<f64>() * span));
            }
            records.push(record);
        }
    }

    log::info!(
        "[chr] demo: generated {} synthetic records ({}-{}, seed {})",
        records.len(),
        FIRST_YEAR,
        LAST_YEAR,
        seed
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_every_county_and_year_once() {
        let records = generate(7);
        assert_eq!(records.len(), COUNTY_COUNT * 11);
        let keys: HashSet<(String, i32)> =
            records.iter().map(|r| (r.fips.clone(), r.year)).collect();
        assert_eq!(keys.len(), records.len());
        assert!(records.iter().all(|r| (FIRST_YEAR..=LAST_YEAR).contains(&r.year)));
    }

    #[test]
    fn same_seed_same_data() {
        assert_eq!(generate(42), generate(42));
        assert_ne!(generate(42), generate(43));
    }

    #[test]
    fn values_fall_in_their_ranges() {
        for record in generate(1) {
            for metric in Metric::ALL {
                let (low, span) = value_range(metric);
                let v = record.value(metric).unwrap();
                assert!(v >= low && v < low + span, "{} = {}", metric, v);
            }
        }
    }

    #[test]
    fn placeholder_names() {
        let records = generate(0);
        assert_eq!(records[0].fips, "01000");
        assert_eq!(records[0].county, "County 0");
        assert_eq!(records[0].state, "California");
        assert_eq!(records[6].state, "Texas");
        assert_eq!(records[99].fips, "01099");
    }
}
