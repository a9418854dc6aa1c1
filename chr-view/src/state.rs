//! View state and its transitions.

use chr_core::{CountyYearRecord, Metric};
use chr_geo::ZoomTransform;

pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_METRIC: Metric = Metric::LifeExpectancy;
pub const ALL_STATES: &str = "all";

/// The county whose detail modal is open.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedCounty {
    pub fips: String,
    pub county: String,
    pub state: String,
    /// Year shown in the modal, independent of the map's year.
    pub modal_year: i32,
}

impl SelectedCounty {
    /// Names for a clicked county: the most recent record in `history`,
    /// else the geography feature's name, else the fips itself.
    pub fn resolve(
        fips: &str,
        feature_name: Option<&str>,
        history: &[CountyYearRecord],
        latest_year: i32,
    ) -> Self {
        let (county, state) = match history.iter().max_by_key(|r| r.year) {
            Some(r) => (r.county.clone(), r.state.clone()),
            None => (feature_name.unwrap_or(fips).to_string(), String::new()),
        };
        SelectedCounty {
            fips: fips.to_string(),
            county,
            state,
            modal_year: latest_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub year: i32,
    pub metric: Metric,
    /// Accepted and stored; rendering and insights ignore it.
    pub state_filter: String,
    pub zoom: ZoomTransform,
    /// County under the pointer.
    pub hovered: Option<String>,
    /// Last county hovered; drives the info panel after the pointer leaves.
    pub inspected: Option<String>,
    pub selected: Option<SelectedCounty>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            year: DEFAULT_YEAR,
            metric: DEFAULT_METRIC,
            state_filter: ALL_STATES.to_string(),
            zoom: ZoomTransform::IDENTITY,
            hovered: None,
            inspected: None,
            selected: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SelectYear(i32),
    SelectMetric(Metric),
    SelectState(String),
    Zoom(ZoomTransform),
    /// `None` when the pointer leaves a county.
    HoverCounty(Option<String>),
    SelectCounty(SelectedCounty),
    SelectModalYear(i32),
    CloseModal,
    Reset,
}

impl ViewState {
    /// The state after `event`. `self` is left untouched.
    pub fn apply(&self, event: ViewEvent) -> ViewState {
        log::debug!("[chr] view: {:?}", event);
        let mut next = self.clone();
        match event {
            ViewEvent::SelectYear(year) => next.year = year,
            ViewEvent::SelectMetric(metric) => next.metric = metric,
            ViewEvent::SelectState(state) => next.state_filter = state,
            ViewEvent::Zoom(zoom) => next.zoom = zoom,
            ViewEvent::HoverCounty(Some(fips)) => {
                next.inspected = Some(fips.clone());
                next.hovered = Some(fips);
            }
            ViewEvent::HoverCounty(None) => next.hovered = None,
            ViewEvent::SelectCounty(county) => next.selected = Some(county),
            ViewEvent::SelectModalYear(year) => {
                if let Some(selected) = next.selected.as_mut() {
                    selected.modal_year = year;
                }
            }
            ViewEvent::CloseModal => next.selected = None,
            ViewEvent::Reset => {
                next.year = DEFAULT_YEAR;
                next.metric = DEFAULT_METRIC;
                next.state_filter = ALL_STATES.to_string();
                next.zoom = ZoomTransform::IDENTITY;
            }
        }
        next
    }

    pub fn selected_fips(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.fips.as_str())
    }
}
