//! U.S. County Health Map
//!
//! Choropleth of thirteen county health metrics by year.
//!
//! Data flow:
//! 1. On mount: fetch the county/state topology and project it once.
//! 2. Fetch the health CSV into an in-memory SQLite store, or fall back to
//!    generated demo data when it cannot be loaded.
//! 3. On year change: query that year's records into `year_records`.
//! 4. Every render recomputes fills, legend and panels from `ViewState`.

use chr_map_ui::components::{
    ChoroplethMap, CountyInfoPanel, CountyModal, DemoModeBanner, ErrorDisplay, InsightsPanel,
    Legend, LoadingSpinner, MetricSelector, ResetButton, YearSlider,
};
use chr_map_ui::config::MapConfig;
use chr_map_ui::loader;
use chr_map_ui::state::AppState;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("county-health-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_context_provider(MapConfig::default);

    // ─── Effect 1: load geography and health data once ───
    use_effect(move || {
        let config = config.clone();
        spawn(loader::load(state, config));
    });

    // ─── Effect 2: refresh the active year's records ───
    // Only the year is tracked, so hover and zoom do not re-query.
    let year = use_memo(move || state.view.read().year);
    use_effect(move || {
        let year = year();
        let records = match state.db.read().as_ref() {
            Some(db) => db.query_records_for_year(year).unwrap_or_else(|e| {
                log::warn!("[chr] records for {} failed: {}", year, e);
                Vec::new()
            }),
            None => return,
        };
        log::debug!("[chr] {} records for {}", records.len(), year);
        state.year_records.set(records);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "margin-bottom: 8px;",
                h1 { style: "font-size: 22px; margin: 0;", "U.S. County Health Map" }
                p {
                    style: "font-size: 13px; color: #666; margin: 2px 0 0 0;",
                    "County health rankings by year. Hover for details, click a county for all metrics."
                }
            }

            div {
                id: "controls",
                style: "display: flex; flex-wrap: wrap; align-items: center; gap: 16px; padding: 8px 0; border-bottom: 1px solid #e0e0e0;",
                YearSlider {}
                MetricSelector {}
                ResetButton {}
            }

            DemoModeBanner {}

            if *state.loading.read() {
                LoadingSpinner {}
            } else if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 8px;",
                    div {
                        id: "map-container",
                        style: "flex: 3 1 600px; min-width: 0;",
                        ChoroplethMap {}
                        Legend {}
                    }
                    div {
                        id: "sidebar",
                        style: "flex: 1 1 240px; display: flex; flex-direction: column; gap: 12px;",
                        CountyInfoPanel {}
                        InsightsPanel {}
                    }
                }
                CountyModal {}
            }
        }
    }
}
