//! TopoJSON decoding.
//!
//! Arcs may be quantized and delta-encoded (when a `transform` is present).
//! Geometries reference arcs by index; a negative index `i` means arc `!i`
//! traversed backwards. Only polygonal geometries are decoded; other types
//! are accepted and skipped.

use anyhow::Context;
use geo_types::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    GeometryCollection {
        geometries: Vec<TopoGeometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Value>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Value>,
    },
    #[serde(other)]
    Other,
}

impl TopoGeometry {
    /// Rings as arc-reference lists, grouped by polygon.
    fn polygons(&self) -> Vec<&[Vec<i64>]> {
        match self {
            TopoGeometry::Polygon { arcs, .. } => vec![arcs.as_slice()],
            TopoGeometry::MultiPolygon { arcs, .. } => arcs.iter().map(Vec::as_slice).collect(),
            _ => Vec::new(),
        }
    }

    fn id(&self) -> Option<String> {
        let id = match self {
            TopoGeometry::Polygon { id, .. } | TopoGeometry::MultiPolygon { id, .. } => id.as_ref()?,
            _ => return None,
        };
        match id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => n.as_i64().map(|n| format!("{:05}", n)),
            _ => None,
        }
    }

    fn name(&self) -> Option<String> {
        match self {
            TopoGeometry::Polygon { properties, .. } | TopoGeometry::MultiPolygon { properties, .. } => properties
                .as_ref()?
                .get("name")?
                .as_str()
                .map(str::to_string),
            _ => None,
        }
    }

    /// Leaf geometries: the members of a collection, or the geometry itself.
    fn members(&self) -> Vec<&TopoGeometry> {
        match self {
            TopoGeometry::GeometryCollection { geometries } => geometries.iter().collect(),
            other => vec![other],
        }
    }
}

/// A decoded polygonal feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: String,
    pub name: Option<String>,
    pub geometry: MultiPolygon<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: HashMap<String, TopoGeometry>,
}

impl Topology {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let topology: Topology =
            serde_json::from_str(json).context("[geo::topology] invalid TopoJSON")?;
        log::info!(
            "[chr] topology: {} arcs, objects: {:?}",
            topology.arcs.len(),
            topology.objects.keys().collect::<Vec<_>>()
        );
        Ok(topology)
    }

    /// Absolute coordinates of every arc.
    pub fn decode_arcs(&self) -> Vec<Vec<Coord<f64>>> {
        self.arcs
            .iter()
            .map(|arc| {
                let positions = arc.iter().filter(|p| p.len() >= 2);
                match &self.transform {
                    Some(t) => {
                        let (mut x, mut y) = (0.0, 0.0);
                        positions
                            .map(|p| {
                                x += p[0];
                                y += p[1];
                                Coord {
                                    x: x * t.scale[0] + t.translate[0],
                                    y: y * t.scale[1] + t.translate[1],
                                }
                            })
                            .collect()
                    }
                    None => positions.map(|p| Coord { x: p[0], y: p[1] }).collect(),
                }
            })
            .collect()
    }

    fn object(&self, name: &str) -> anyhow::Result<&TopoGeometry> {
        self.objects
            .get(name)
            .with_context(|| format!("[geo::topology] topology has no object '{}'", name))
    }

    /// Polygonal features of the named object, skipping those without an id.
    pub fn features(&self, object: &str) -> anyhow::Result<Vec<Feature>> {
        let arcs = self.decode_arcs();
        let features: Vec<Feature> = self
            .object(object)?
            .members()
            .into_iter()
            .filter_map(|g| {
                let id = g.id()?;
                let polygons: Vec<Polygon<f64>> = g
                    .polygons()
                    .into_iter()
                    .filter_map(|rings| polygon(&arcs, rings))
                    .collect();
                Some(Feature {
                    id,
                    name: g.name(),
                    geometry: MultiPolygon(polygons),
                })
            })
            .collect();
        log::info!("[chr] topology: decoded {} features from '{}'", features.len(), object);
        Ok(features)
    }

    /// Arcs shared by two different geometries of the named object, i.e. the
    /// interior borders between its members.
    pub fn interior_mesh(&self, object: &str) -> anyhow::Result<MultiLineString<f64>> {
        let members = self.object(object)?.members();

        // arc index -> (first geometry, last geometry) referencing it
        let mut owners: HashMap<usize, (usize, usize)> = HashMap::new();
        for (g, geometry) in members.iter().enumerate() {
            for rings in geometry.polygons() {
                for ring in rings {
                    for &r in ring {
                        owners
                            .entry(arc_index(r))
                            .and_modify(|e| e.1 = g)
                            .or_insert((g, g));
                    }
                }
            }
        }

        let arcs = self.decode_arcs();
        let mut shared: Vec<usize> = owners
            .into_iter()
            .filter(|(_, (first, last))| first != last)
            .map(|(arc, _)| arc)
            .collect();
        shared.sort_unstable();

        let lines = shared
            .into_iter()
            .filter_map(|i| arcs.get(i))
            .filter(|coords| coords.len() >= 2)
            .map(|coords| LineString(coords.clone()))
            .collect();
        Ok(MultiLineString(lines))
    }
}

fn arc_index(r: i64) -> usize {
    if r < 0 {
        !r as usize
    } else {
        r as usize
    }
}

/// Stitch arc references into one closed ring.
fn ring(arcs: &[Vec<Coord<f64>>], refs: &[i64]) -> Vec<Coord<f64>> {
    let mut points: Vec<Coord<f64>> = Vec::new();
    for &r in refs {
        let Some(arc) = arcs.get(arc_index(r)) else {
            continue;
        };
        // consecutive arcs share their joint vertex
        points.pop();
        if r < 0 {
            points.extend(arc.iter().rev());
        } else {
            points.extend(arc.iter());
        }
    }
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            points.push(first);
        }
    }
    points
}

fn polygon(arcs: &[Vec<Coord<f64>>], rings: &[Vec<i64>]) -> Option<Polygon<f64>> {
    let mut decoded = rings.iter().map(|refs| ring(arcs, refs)).filter(|r| r.len() >= 4);
    let exterior = decoded.next()?;
    Some(Polygon::new(LineString(exterior), decoded.map(LineString).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two unit squares side by side sharing the arc x=1.
    ///
    /// arc 0: (1,0) -> (1,1)            shared border
    /// arc 1: (1,1) -> (0,1) -> (0,0) -> (1,0)   left square remainder
    /// arc 2: (1,0) -> (2,0) -> (2,1) -> (1,1)   right square remainder
    const TWO_SQUARES: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[1,0],[1,1]],
            [[1,1],[0,1],[0,0],[1,0]],
            [[1,0],[2,0],[2,1],[1,1]]
        ],
        "objects": {
            "counties": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": "00001", "arcs": [[0, 1]], "properties": {"name": "West"}},
                    {"type": "Polygon", "id": 2, "arcs": [[2, -1]]},
                    {"type": "Point", "coordinates": [0, 0]},
                    {"type": "Polygon", "arcs": []}
                ]
            }
        }
    }"#;

    #[test]
    fn decodes_polygons_with_ids_and_names() {
        let topo = Topology::from_json(TWO_SQUARES).unwrap();
        let features = topo.features("counties").unwrap();
        assert_eq!(features.len(), 2, "point and id-less geometries are skipped");
        assert_eq!(features[0].id, "00001");
        assert_eq!(features[0].name.as_deref(), Some("West"));
        assert_eq!(features[1].id, "00002", "numeric ids are zero-padded");
        assert_eq!(features[1].name, None);
    }

    #[test]
    fn rings_are_stitched_and_closed() {
        let topo = Topology::from_json(TWO_SQUARES).unwrap();
        let features = topo.features("counties").unwrap();
        let west = &features[0].geometry.0[0];
        let xs: Vec<(f64, f64)> = west.exterior().0.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(xs, vec![(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)]);

        let east = &features[1].geometry.0[0];
        let xs: Vec<(f64, f64)> = east.exterior().0.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(xs, vec![(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    }

    #[test]
    fn mesh_keeps_only_shared_arcs() {
        let topo = Topology::from_json(TWO_SQUARES).unwrap();
        let mesh = topo.interior_mesh("counties").unwrap();
        assert_eq!(mesh.0.len(), 1);
        let line: Vec<(f64, f64)> = mesh.0[0].0.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(line, vec![(1.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn quantized_arcs_are_delta_decoded() {
        let json = r#"{
            "type": "Topology",
            "transform": {"scale": [0.5, 2.0], "translate": [10.0, -5.0]},
            "arcs": [[[2, 3], [1, 1], [-2, 0]]],
            "objects": {}
        }"#;
        let topo = Topology::from_json(json).unwrap();
        let arcs = topo.decode_arcs();
        let coords: Vec<(f64, f64)> = arcs[0].iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(11.0, 1.0), (11.5, 3.0), (10.5, 3.0)]);
    }

    #[test]
    fn missing_object_is_an_error() {
        let topo = Topology::from_json(TWO_SQUARES).unwrap();
        assert!(topo.features("states").is_err());
        assert!(topo.interior_mesh("states").is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Topology::from_json("{\"type\": \"Topology\"").is_err());
    }
}
