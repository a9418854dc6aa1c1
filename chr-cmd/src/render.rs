//! Static SVG rendering of one metric and year.
//!
//! Goes through the same `Scene` and `LegendModel` as the page, so a
//! rendered file shows exactly the fills and legend the browser would.

use crate::input::{open_database, read_data};
use anyhow::Context;
use chr_core::Metric;
use chr_db::Database;
use chr_geo::{ProjectedMap, Topology};
use chr_view::svg::write_svg;
use chr_view::{LegendModel, Scene, ViewEvent, ViewState};
use log::info;
use std::fs::File;
use std::io::BufWriter;

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 600.0;

/// Render the choropleth of `metric` in `year` as SVG bytes.
pub fn render_svg(db: &Database, topology_json: &str, metric: Metric, year: i32) -> anyhow::Result<Vec<u8>> {
    let topology = Topology::from_json(topology_json)?;
    let map = ProjectedMap::from_topology(&topology, WIDTH, HEIGHT)?;
    let records = db.query_records_for_year(year)?;
    let view = ViewState::default()
        .apply(ViewEvent::SelectYear(year))
        .apply(ViewEvent::SelectMetric(metric));

    let scene = Scene::build(&map, &records, &view);
    let legend = LegendModel::build(metric);
    let mut svg = Vec::new();
    write_svg(&mut svg, &scene, &legend, WIDTH, HEIGHT)?;
    Ok(svg)
}

pub fn run_render(data: &str, geo: &str, metric: Metric, year: i32, output: &str) -> anyhow::Result<()> {
    let db = open_database(data)?;
    let topology_json = read_data(geo)?;
    let svg = render_svg(&db, &topology_json, metric, year)?;

    let file = File::create(output).with_context(|| format!("cannot create {}", output))?;
    std::io::copy(&mut svg.as_slice(), &mut BufWriter::new(file))?;
    info!("Rendered {} for {} to {}", metric.name(), year, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chr_data::color::{SequentialScale, NEUTRAL_FILL};

    const TOPOLOGY: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[-98,38],[-98,39]],
            [[-98,39],[-99,39],[-99,38],[-98,38]],
            [[-98,38],[-97,38],[-97,39],[-98,39]]
        ],
        "objects": {
            "counties": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": "20001", "arcs": [[0, 1]]},
                    {"type": "Polygon", "id": "20003", "arcs": [[2, -1]]}
                ]
            },
            "states": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": "19", "arcs": [[0, 1]]},
                    {"type": "Polygon", "id": "20", "arcs": [[2, -1]]}
                ]
            }
        }
    }"#;

    #[test]
    fn renders_fills_borders_and_legend() {
        let db = Database::new().unwrap();
        db.load_health_csv("fips,county,state,year,adult_obesity\n20001,West,Kansas,2020,35.0\n")
            .unwrap();

        let svg = String::from_utf8(render_svg(&db, TOPOLOGY, Metric::AdultObesity, 2020).unwrap()).unwrap();
        let expected = SequentialScale::for_metric(Metric::AdultObesity).fill(Some(35.0));

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(&format!(r#"data-fips="20001" fill="{}""#, expected)));
        assert!(svg.contains(&format!(r#"data-fips="20003" fill="{}""#, NEUTRAL_FILL)));
        assert!(svg.contains(r#"<g class="states""#));
        assert!(svg.contains("Adult Obesity"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn bad_topology_is_an_error() {
        let db = Database::new().unwrap();
        assert!(render_svg(&db, "{}", Metric::LifeExpectancy, 2024).is_err());
    }
}
