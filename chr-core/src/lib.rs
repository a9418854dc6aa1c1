//! Core types for the county health choropleth.
//!
//! - `metric`: the fixed registry of thirteen health metrics (names, units,
//!   formatters, color domains and schemes)
//! - `record`: one row of the health table per (county, year), plus CSV
//!   parsing and writing

pub mod metric;
pub mod record;

pub use metric::{ColorScheme, Metric, MetricConfig, ValueFormat};
pub use record::CountyYearRecord;
