//! Numeric side of the county health map.
//!
//! This crate turns metric values into things a renderer can draw:
//! colors along a sequential scheme, summary statistics, nicely rounded
//! axis ticks, and a seeded synthetic dataset for demo mode.

pub mod color;
pub mod demo;
pub mod stats;
pub mod ticks;
