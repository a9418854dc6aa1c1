//! Dioxus front end for the county health map.
//!
//! This crate provides:
//! - `config`: URLs, drawing size and other fixed settings
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `fetch`: browser `fetch` wrappers with a typed `LoadError`
//! - `loader`: startup sequence (geography, then health data or demo mode)
//! - `components`: the controls, map, legend, panels and modal

pub mod components;
pub mod config;
pub mod fetch;
pub mod loader;
pub mod state;
