//! Aggregate query results and data provenance.

use chr_core::Metric;
use serde::Serialize;
use std::fmt;

/// How many rows of one year carry a value for each metric.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearCoverage {
    pub year: i32,
    /// Total rows (counties) for the year.
    pub rows: usize,
    /// Non-null counts, in [`Metric::ALL`] order.
    pub present: Vec<(Metric, usize)>,
}

impl YearCoverage {
    pub fn present_for(&self, metric: Metric) -> usize {
        self.present
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }

    /// Share of rows with a value, in percent; 0 for an empty year.
    pub fn percent(&self, metric: Metric) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        self.present_for(metric) as f64 * 100.0 / self.rows as f64
    }
}

/// A state and how many counties it has rows for.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateCount {
    pub state: String,
    pub counties: usize,
}

/// Where the records in the database came from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum DataSource {
    Loaded { rows: usize },
    /// The health table could not be loaded; generated sample data is shown.
    Demo { reason: String },
}

impl DataSource {
    pub fn is_demo(&self) -> bool {
        matches!(self, DataSource::Demo { .. })
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Loaded { rows } => write!(f, "{} county-year records", rows),
            DataSource::Demo { reason } => write!(
                f,
                "Demo mode: showing generated sample data because the health data could not be loaded ({})",
                reason
            ),
        }
    }
}
