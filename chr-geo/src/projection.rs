//! Composite Albers USA projection.
//!
//! Three conic equal-area projections: the lower 48 states, plus Alaska
//! (scaled to 0.35) and Hawaii drawn as insets in the lower-left corner.
//! A point is projected by the first projection whose clip box contains it.
//! Points outside all three boxes (e.g. Puerto Rico) do not project.

use std::f64::consts::PI;

/// Which of the three component projections a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inset {
    Lower48,
    Alaska,
    Hawaii,
}

/// A rotated, recentred conic equal-area projection.
#[derive(Debug, Clone, Copy)]
struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
    /// Longitude rotation, radians.
    rotate: f64,
    /// Raw projected centre.
    cx: f64,
    cy: f64,
    k: f64,
    tx: f64,
    ty: f64,
}

impl ConicEqualArea {
    /// `parallels`, `rotate` and `center` in degrees.
    fn new(parallels: (f64, f64), rotate: f64, center: (f64, f64), k: f64, translate: (f64, f64)) -> Self {
        let sy0 = parallels.0.to_radians().sin();
        let n = (sy0 + parallels.1.to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;
        let mut p = ConicEqualArea {
            n,
            c,
            r0,
            rotate: rotate.to_radians(),
            cx: 0.0,
            cy: 0.0,
            k,
            tx: translate.0,
            ty: translate.1,
        };
        let (cx, cy) = p.raw(center.0.to_radians(), center.1.to_radians());
        p.cx = cx;
        p.cy = cy;
        p
    }

    fn raw(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let r = (self.c - 2.0 * self.n * phi.sin()).sqrt() / self.n;
        let a = lambda * self.n;
        (r * a.sin(), self.r0 - r * a.cos())
    }

    /// Longitude/latitude in degrees to screen coordinates.
    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lambda = wrap(lon.to_radians() + self.rotate);
        let (x, y) = self.raw(lambda, lat.to_radians());
        (self.tx + self.k * (x - self.cx), self.ty - self.k * (y - self.cy))
    }
}

fn wrap(lambda: f64) -> f64 {
    if lambda > PI {
        lambda - 2.0 * PI
    } else if lambda < -PI {
        lambda + 2.0 * PI
    } else {
        lambda
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ClipBox {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl ClipBox {
    fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlbersUsa {
    lower48: ConicEqualArea,
    alaska: ConicEqualArea,
    hawaii: ConicEqualArea,
    clips: [ClipBox; 3],
}

impl AlbersUsa {
    /// Scale factor relative to the drawing width used by the map.
    pub const WIDTH_SCALE: f64 = 1.3;

    pub fn new(k: f64, translate: (f64, f64)) -> Self {
        const EPSILON: f64 = 1e-6;
        let (x, y) = translate;
        let clip = |x0: f64, y0: f64, x1: f64, y1: f64| ClipBox {
            x0: x + x0 * k + EPSILON,
            y0: y + y0 * k + EPSILON,
            x1: x + x1 * k - EPSILON,
            y1: y + y1 * k - EPSILON,
        };
        AlbersUsa {
            lower48: ConicEqualArea::new((29.5, 45.5), 96.0, (-0.6, 38.7), k, (x, y)),
            alaska: ConicEqualArea::new(
                (55.0, 65.0),
                154.0,
                (-2.0, 58.5),
                k * 0.35,
                (x - 0.307 * k, y + 0.201 * k),
            ),
            hawaii: ConicEqualArea::new((8.0, 18.0), 157.0, (-3.0, 19.9), k, (x - 0.205 * k, y + 0.212 * k)),
            clips: [
                clip(-0.455, -0.238, 0.455, 0.238),
                clip(-0.425, 0.120, -0.214, 0.234),
                clip(-0.214, 0.166, -0.115, 0.234),
            ],
        }
    }

    /// Centred in a `width` x `height` drawing at `WIDTH_SCALE * width`.
    pub fn fit_width(width: f64, height: f64) -> Self {
        Self::new(width * Self::WIDTH_SCALE, (width / 2.0, height / 2.0))
    }

    fn component(&self, inset: Inset) -> &ConicEqualArea {
        match inset {
            Inset::Lower48 => &self.lower48,
            Inset::Alaska => &self.alaska,
            Inset::Hawaii => &self.hawaii,
        }
    }

    /// The component whose clip box contains the projected point.
    pub fn inset(&self, lon: f64, lat: f64) -> Option<Inset> {
        [Inset::Lower48, Inset::Alaska, Inset::Hawaii]
            .into_iter()
            .zip(self.clips.iter())
            .find(|(inset, clip)| clip.contains(self.component(*inset).project(lon, lat)))
            .map(|(inset, _)| inset)
    }

    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        self.inset(lon, lat).map(|inset| self.project_in(inset, lon, lat))
    }

    /// Project with a fixed component, unclipped. Used to keep every vertex
    /// of one shape in the same inset.
    pub fn project_in(&self, inset: Inset, lon: f64, lat: f64) -> (f64, f64) {
        self.component(inset).project(lon, lat)
    }
}

impl Default for AlbersUsa {
    fn default() -> Self {
        Self::new(1070.0, (480.0, 250.0))
    }
}
