//! SVG path data.
//!
//! Rings become `M x,y L x,y ... Z`, lines the same without the closing `Z`.
//! Coordinates are written with one decimal, enough for a 960-wide viewBox.

use geo_types::{Coord, LineString, MultiPolygon};
use std::fmt::Write;

fn write_points<F>(out: &mut String, line: &LineString<f64>, project: &F, close: bool)
where
    F: Fn(Coord<f64>) -> (f64, f64),
{
    let mut points = line.0.iter().map(|&c| project(c));
    let Some((x, y)) = points.next() else {
        return;
    };
    let _ = write!(out, "M{:.1},{:.1}", x, y);
    for (x, y) in points {
        let _ = write!(out, "L{:.1},{:.1}", x, y);
    }
    if close {
        out.push('Z');
    }
}

/// Path data for every ring (exterior and holes) of a multipolygon.
pub fn multipolygon_path<F>(shape: &MultiPolygon<f64>, project: F) -> String
where
    F: Fn(Coord<f64>) -> (f64, f64),
{
    let mut out = String::new();
    for polygon in &shape.0 {
        write_points(&mut out, polygon.exterior(), &project, true);
        for hole in polygon.interiors() {
            write_points(&mut out, hole, &project, true);
        }
    }
    out
}

/// Path data for an open polyline.
pub fn line_path<F>(line: &LineString<f64>, project: F) -> String
where
    F: Fn(Coord<f64>) -> (f64, f64),
{
    let mut out = String::new();
    write_points(&mut out, line, &project, false);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{LineString, Polygon};

    fn identity(c: Coord<f64>) -> (f64, f64) {
        (c.x, c.y)
    }

    #[test]
    fn square_path_is_closed() {
        let square = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        let d = multipolygon_path(&MultiPolygon(vec![square]), identity);
        assert_eq!(d, "M0.0,0.0L10.0,0.0L10.0,10.0L0.0,0.0Z");
    }

    #[test]
    fn holes_get_their_own_subpath() {
        let ring = |o: f64, s: f64| LineString::from(vec![(o, o), (o + s, o), (o + s, o + s), (o, o)]);
        let with_hole = Polygon::new(ring(0.0, 10.0), vec![ring(2.0, 2.0)]);
        let d = multipolygon_path(&MultiPolygon(vec![with_hole]), identity);
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
    }

    #[test]
    fn projection_is_applied() {
        let line = LineString::from(vec![(1.0, 2.0), (3.0, 4.0)]);
        let d = line_path(&line, |c| (c.x * 2.0, -c.y));
        assert_eq!(d, "M2.0,-2.0L6.0,-4.0");
    }

    #[test]
    fn empty_geometry_gives_empty_path() {
        assert_eq!(multipolygon_path(&MultiPolygon(vec![]), identity), "");
        assert_eq!(line_path(&LineString(vec![]), identity), "");
    }
}
