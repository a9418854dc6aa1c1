//! Startup sequence.
//!
//! Geography first: without it nothing can be drawn, so its failure is
//! fatal and shown on the page. Health data second: its failure switches
//! the page to demo mode with a `warn!` and a visible banner.

use crate::config::MapConfig;
use crate::fetch::{self, LoadError};
use crate::state::AppState;
use chr_db::Database;
use chr_geo::{ProjectedMap, Topology};
use dioxus::prelude::*;

/// Fetch, decode and project the boundary topology.
pub async fn load_geography(config: &MapConfig) -> Result<ProjectedMap, LoadError> {
    log::info!("[chr] loading geography from {}", config.geography_url);
    let json = fetch::fetch_text(&config.geography_url).await?;
    decode_geography(&json, config)
}

fn decode_geography(json: &str, config: &MapConfig) -> Result<ProjectedMap, LoadError> {
    Topology::from_json(json)
        .and_then(|topology| ProjectedMap::from_topology(&topology, config.width, config.height))
        .map_err(|e| LoadError::Decode {
            what: "geography".to_string(),
            message: format!("{:#}", e),
        })
}

/// Run the whole startup sequence and fill `state`.
pub async fn load(mut state: AppState, config: MapConfig) {
    let map = match load_geography(&config).await {
        Ok(map) => map,
        Err(e) => {
            log::error!("[chr] geography failed to load: {}", e);
            state
                .error_msg
                .set(Some(format!("Error loading map data: {}", e)));
            state.loading.set(false);
            return;
        }
    };

    let db = match Database::new() {
        Ok(db) => db,
        Err(e) => {
            state
                .error_msg
                .set(Some(format!("Database initialization failed: {}", e)));
            state.loading.set(false);
            return;
        }
    };

    log::info!("[chr] loading health data from {}", config.health_data_url);
    let fetched = fetch::fetch_csv(&config.health_data_url)
        .await
        .map_err(|e| e.to_string());
    let source = match db.load_health_or_demo(fetched, config.seed()) {
        Ok(source) => source,
        Err(e) => {
            state
                .error_msg
                .set(Some(format!("Failed to load health data: {}", e)));
            state.loading.set(false);
            return;
        }
    };

    match db.query_years() {
        Ok(years) => state.years.set(years),
        Err(e) => log::warn!("[chr] could not list years: {}", e),
    }
    log::info!("[chr] data loaded: {}", source);

    state.map.set(Some(map));
    state.data_source.set(Some(source));
    state.db.set(Some(db));
    state.loading.set(false);
}
