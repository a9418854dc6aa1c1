//! Fill and stroke of every county for one view state.

use crate::state::ViewState;
use chr_core::CountyYearRecord;
use chr_data::color::SequentialScale;
use chr_geo::ProjectedMap;
use std::collections::HashMap;
use std::rc::Rc;

/// Border style of a county path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

impl Stroke {
    pub const DEFAULT: Stroke = Stroke { color: "#fff", width: 0.5 };
    pub const HOVER: Stroke = Stroke { color: "#333", width: 2.0 };
    pub const SELECTED: Stroke = Stroke { color: "#ff6b6b", width: 3.0 };

    /// The selection highlight wins over hover.
    pub fn for_county(fips: &str, view: &ViewState) -> Stroke {
        if view.selected_fips() == Some(fips) {
            Stroke::SELECTED
        } else if view.hovered.as_deref() == Some(fips) {
            Stroke::HOVER
        } else {
            Stroke::DEFAULT
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountyPaint {
    pub fips: String,
    /// Shared with the projected map; never copied per render.
    pub path: Rc<str>,
    pub fill: String,
    pub stroke: Stroke,
    /// A record for the view's year exists and carries at least one value.
    pub has_data: bool,
}

/// Records keyed by fips.
pub fn index_by_fips(records: &[CountyYearRecord]) -> HashMap<&str, &CountyYearRecord> {
    records.iter().map(|r| (r.fips.as_str(), r)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view_box: String,
    pub transform: String,
    pub counties: Vec<CountyPaint>,
    pub state_borders: Rc<str>,
}

impl Scene {
    /// Paint every projected county from `year_records`, the records of
    /// `view.year`. Counties without a record or value get the neutral fill.
    pub fn build(map: &ProjectedMap, year_records: &[CountyYearRecord], view: &ViewState) -> Scene {
        let scale = SequentialScale::for_metric(view.metric);
        let by_fips = index_by_fips(year_records);

        let counties = map
            .counties
            .iter()
            .map(|shape| {
                let record = by_fips.get(shape.fips.as_str());
                CountyPaint {
                    fips: shape.fips.clone(),
                    path: shape.path.clone(),
                    fill: scale.fill(record.and_then(|r| r.value(view.metric))),
                    stroke: Stroke::for_county(&shape.fips, view),
                    has_data: record.is_some_and(|r| r.has_any_value()),
                }
            })
            .collect();

        Scene {
            view_box: map.view_box(),
            transform: view.zoom.to_svg_transform(),
            counties,
            state_borders: map.state_borders.clone(),
        }
    }

    pub fn county(&self, fips: &str) -> Option<&CountyPaint> {
        self.counties.iter().find(|c| c.fips == fips)
    }

    pub fn visible_fips(&self) -> Vec<&str> {
        self.counties
            .iter()
            .filter(|c| c.has_data)
            .map(|c| c.fips.as_str())
            .collect()
    }
}
