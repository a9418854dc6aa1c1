//! The projected county map.
//!
//! Built once after the geography loads; every later render only recolors
//! the shapes, so paths are computed here and never again.

use crate::path::{line_path, multipolygon_path};
use crate::projection::{AlbersUsa, Inset};
use crate::topology::Topology;
use geo_types::{Coord, LineString, MultiPolygon};
use std::rc::Rc;

pub const COUNTIES_OBJECT: &str = "counties";
pub const STATES_OBJECT: &str = "states";

#[derive(Debug, Clone, PartialEq)]
pub struct CountyShape {
    pub fips: String,
    /// `properties.name` from the topology, if any.
    pub name: Option<String>,
    /// SVG path data in viewBox coordinates, shared with every render.
    pub path: Rc<str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMap {
    pub width: f64,
    pub height: f64,
    pub counties: Vec<CountyShape>,
    /// One path holding every interior state border.
    pub state_borders: Rc<str>,
}

/// Inset of the first vertex that lands in one.
fn shape_inset<'a>(projection: &AlbersUsa, mut coords: impl Iterator<Item = &'a Coord<f64>>) -> Option<Inset> {
    coords.find_map(|c| projection.inset(c.x, c.y))
}

fn multipolygon_coords(shape: &MultiPolygon<f64>) -> impl Iterator<Item = &Coord<f64>> {
    shape
        .0
        .iter()
        .flat_map(|p| std::iter::once(p.exterior()).chain(p.interiors().iter()))
        .flat_map(|ring| ring.0.iter())
}

impl ProjectedMap {
    /// Project the `counties` features and `states` mesh of a us-atlas style
    /// topology into a `width` x `height` drawing.
    pub fn from_topology(topology: &Topology, width: f64, height: f64) -> anyhow::Result<Self> {
        let projection = AlbersUsa::fit_width(width, height);

        let features = topology.features(COUNTIES_OBJECT)?;
        let total = features.len();
        let counties: Vec<CountyShape> = features
            .into_iter()
            .filter_map(|feature| {
                let inset = shape_inset(&projection, multipolygon_coords(&feature.geometry))?;
                let path = multipolygon_path(&feature.geometry, |c| projection.project_in(inset, c.x, c.y));
                Some(CountyShape {
                    fips: feature.id,
                    name: feature.name,
                    path: path.into(),
                })
            })
            .collect();
        if counties.len() < total {
            log::debug!(
                "[chr] map: {} of {} counties fall outside the projection",
                total - counties.len(),
                total
            );
        }

        let state_borders = if topology.objects.contains_key(STATES_OBJECT) {
            let mesh = topology.interior_mesh(STATES_OBJECT)?;
            mesh.0
                .iter()
                .filter_map(|line: &LineString<f64>| {
                    let inset = shape_inset(&projection, line.0.iter())?;
                    Some(line_path(line, |c| projection.project_in(inset, c.x, c.y)))
                })
                .collect::<String>()
        } else {
            log::warn!("[chr] map: topology has no '{}' object, drawing no borders", STATES_OBJECT);
            String::new()
        };

        log::info!("[chr] map: projected {} counties", counties.len());
        Ok(ProjectedMap {
            width,
            height,
            counties,
            state_borders: state_borders.into(),
        })
    }

    /// SVG `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two one-degree squares in Kansas sharing the meridian -98, grouped
    /// into one state each, plus a county in the Atlantic far off the map.
    const KANSAS: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[-98,38],[-98,39]],
            [[-98,39],[-99,39],[-99,38],[-98,38]],
            [[-98,38],[-97,38],[-97,39],[-98,39]],
            [[-30,10],[-29,10],[-29,11],[-30,10]]
        ],
        "objects": {
            "counties": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": "20001", "arcs": [[0, 1]], "properties": {"name": "West"}},
                    {"type": "Polygon", "id": "20003", "arcs": [[2, -1]], "properties": {"name": "East"}},
                    {"type": "Polygon", "id": "99999", "arcs": [[3]]}
                ]
            },
            "states": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": "01", "arcs": [[0, 1]]},
                    {"type": "Polygon", "id": "02", "arcs": [[2, -1]]}
                ]
            }
        }
    }"#;

    #[test]
    fn projects_counties_and_drops_unprojectable() {
        let topo = Topology::from_json(KANSAS).unwrap();
        let map = ProjectedMap::from_topology(&topo, 960.0, 600.0).unwrap();
        let fips: Vec<&str> = map.counties.iter().map(|c| c.fips.as_str()).collect();
        assert_eq!(fips, vec!["20001", "20003"]);
        assert_eq!(map.counties[0].name.as_deref(), Some("West"));
        for county in &map.counties {
            assert!(county.path.starts_with('M'));
            assert!(county.path.ends_with('Z'));
        }
    }

    #[test]
    fn state_borders_are_open_lines() {
        let topo = Topology::from_json(KANSAS).unwrap();
        let map = ProjectedMap::from_topology(&topo, 960.0, 600.0).unwrap();
        assert_eq!(map.state_borders.matches('M').count(), 1);
        assert!(!map.state_borders.contains('Z'));
    }

    #[test]
    fn missing_states_object_draws_no_borders() {
        let json = KANSAS.replace("\"states\"", "\"other\"");
        let topo = Topology::from_json(&json).unwrap();
        let map = ProjectedMap::from_topology(&topo, 960.0, 600.0).unwrap();
        assert_eq!(map.counties.len(), 2);
        assert!(map.state_borders.is_empty());
    }

    #[test]
    fn view_box_matches_size() {
        let map = ProjectedMap {
            width: 960.0,
            height: 600.0,
            counties: Vec::new(),
            state_borders: Rc::from(""),
        };
        assert_eq!(map.view_box(), "0 0 960 600");
    }
}
