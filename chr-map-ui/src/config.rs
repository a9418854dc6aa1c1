//! Fixed settings of the page.

/// U.S. counties and states topology, 1:10m.
pub const GEOGRAPHY_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/counties-10m.json";
/// Health table served next to the app; a `.gz` suffix is decompressed.
pub const HEALTH_DATA_URL: &str = "data/county_health_data.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub geography_url: String,
    pub health_data_url: String,
    /// Drawing size in viewBox units.
    pub width: f64,
    pub height: f64,
    pub transition_ms: u32,
    /// Fixed demo-mode seed; `None` seeds from the clock.
    pub demo_seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            geography_url: GEOGRAPHY_URL.to_string(),
            health_data_url: HEALTH_DATA_URL.to_string(),
            width: 960.0,
            height: 600.0,
            transition_ms: 500,
            demo_seed: None,
        }
    }
}

impl MapConfig {
    pub fn seed(&self) -> u64 {
        self.demo_seed.unwrap_or_else(|| js_sys::Date::now() as u64)
    }

    /// CSS transition applied to county fills.
    pub fn fill_transition(&self) -> String {
        format!("fill {}ms", self.transition_ms)
    }
}
