//! Page-wide reactive state.
//!
//! The app root provides one `AppState` through context; every component
//! reads the signals it renders from and changes the view only through
//! [`AppState::dispatch`].

use chr_core::CountyYearRecord;
use chr_db::models::DataSource;
use chr_db::Database;
use chr_geo::ProjectedMap;
use chr_view::{ViewEvent, ViewState};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Health records store, set once loading finishes
    pub db: Signal<Option<Database>>,
    /// Projected county shapes (None until the geography loads)
    pub map: Signal<Option<ProjectedMap>>,
    /// True until the startup sequence ends, successfully or not
    pub loading: Signal<bool>,
    /// Fatal error message (geography failures)
    pub error_msg: Signal<Option<String>>,
    /// Where the health records came from
    pub data_source: Signal<Option<DataSource>>,
    /// Distinct years in the data, ascending
    pub years: Signal<Vec<i32>>,
    /// Current selection, zoom, hover and modal
    pub view: Signal<ViewState>,
    /// Records of `view.year`, refreshed when the year changes
    pub year_records: Signal<Vec<CountyYearRecord>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            map: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            data_source: Signal::new(None),
            years: Signal::new(Vec::new()),
            view: Signal::new(ViewState::default()),
            year_records: Signal::new(Vec::new()),
        }
    }

    /// Apply a view transition.
    pub fn dispatch(&mut self, event: ViewEvent) {
        let next = self.view.read().apply(event);
        self.view.set(next);
    }

    /// Latest year in the data, falling back to the default view year.
    pub fn latest_year(&self) -> i32 {
        self.years
            .read()
            .last()
            .copied()
            .unwrap_or(chr_view::state::DEFAULT_YEAR)
    }

    /// Slider bounds: the data's year span, or the default year alone.
    pub fn year_range(&self) -> (i32, i32) {
        let years = self.years.read();
        match (years.first(), years.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => (chr_view::state::DEFAULT_YEAR, chr_view::state::DEFAULT_YEAR),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
