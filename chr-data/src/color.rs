//! Sequential color scales for the choropleth.
//!
//! Each [`ColorScheme`] is a nine-step ColorBrewer ramp, interpolated with a
//! uniform cubic B-spline per RGB channel. The spline passes exactly through
//! the first and last ramp colors, and positions outside `[0, 1]` clamp to
//! those ends.

use chr_core::{ColorScheme, Metric};
use std::fmt;

/// Fill for counties with no record or no value for the active metric.
pub const NEUTRAL_FILL: &str = "#ccc";

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    const fn hex(v: u32) -> Rgb {
        Rgb { r: (v >> 16) as u8, g: (v >> 8) as u8, b: v as u8 }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const GREENS: [Rgb; 9] = [
    Rgb::hex(0xf7fcf5), Rgb::hex(0xe5f5e0), Rgb::hex(0xc7e9c0),
    Rgb::hex(0xa1d99b), Rgb::hex(0x74c476), Rgb::hex(0x41ab5d),
    Rgb::hex(0x238b45), Rgb::hex(0x006d2c), Rgb::hex(0x00441b),
];
const REDS: [Rgb; 9] = [
    Rgb::hex(0xfff5f0), Rgb::hex(0xfee0d2), Rgb::hex(0xfcbba1),
    Rgb::hex(0xfc9272), Rgb::hex(0xfb6a4a), Rgb::hex(0xef3b2c),
    Rgb::hex(0xcb181d), Rgb::hex(0xa50f15), Rgb::hex(0x67000d),
];
const ORANGES: [Rgb; 9] = [
    Rgb::hex(0xfff5eb), Rgb::hex(0xfee6ce), Rgb::hex(0xfdd0a2),
    Rgb::hex(0xfdae6b), Rgb::hex(0xfd8d3c), Rgb::hex(0xf16913),
    Rgb::hex(0xd94801), Rgb::hex(0xa63603), Rgb::hex(0x7f2704),
];
const PURPLES: [Rgb; 9] = [
    Rgb::hex(0xfcfbfd), Rgb::hex(0xefedf5), Rgb::hex(0xdadaeb),
    Rgb::hex(0xbcbddc), Rgb::hex(0x9e9ac8), Rgb::hex(0x807dba),
    Rgb::hex(0x6a51a3), Rgb::hex(0x54278f), Rgb::hex(0x3f007d),
];
const OR_RD: [Rgb; 9] = [
    Rgb::hex(0xfff7ec), Rgb::hex(0xfee8c8), Rgb::hex(0xfdd49e),
    Rgb::hex(0xfdbb84), Rgb::hex(0xfc8d59), Rgb::hex(0xef6548),
    Rgb::hex(0xd7301f), Rgb::hex(0xb30000), Rgb::hex(0x7f0000),
];
const BLUES: [Rgb; 9] = [
    Rgb::hex(0xf7fbff), Rgb::hex(0xdeebf7), Rgb::hex(0xc6dbef),
    Rgb::hex(0x9ecae1), Rgb::hex(0x6baed6), Rgb::hex(0x4292c6),
    Rgb::hex(0x2171b5), Rgb::hex(0x08519c), Rgb::hex(0x08306b),
];

/// The ramp colors for a scheme, lightest first.
pub fn ramp(scheme: ColorScheme) -> &'static [Rgb; 9] {
    match scheme {
        ColorScheme::Greens => &GREENS,
        ColorScheme::Reds => &REDS,
        ColorScheme::Oranges => &ORANGES,
        ColorScheme::Purples => &PURPLES,
        ColorScheme::OrRd => &OR_RD,
        ColorScheme::Blues => &BLUES,
    }
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// B-spline through `values` at position `t`, clamped to `[0, 1]`.
fn spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Interpolate a scheme at `t` in `[0, 1]`.
pub fn interpolate(scheme: ColorScheme, t: f64) -> Rgb {
    let colors = ramp(scheme);
    let rs: Vec<f64> = colors.iter().map(|c| c.r as f64).collect();
    let gs: Vec<f64> = colors.iter().map(|c| c.g as f64).collect();
    let bs: Vec<f64> = colors.iter().map(|c| c.b as f64).collect();
    Rgb {
        r: channel(spline(&rs, t)),
        g: channel(spline(&gs, t)),
        b: channel(spline(&bs, t)),
    }
}

/// Continuous mapping from a metric's domain onto its color scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialScale {
    pub domain: (f64, f64),
    pub scheme: ColorScheme,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), scheme: ColorScheme) -> Self {
        Self { domain, scheme }
    }

    pub fn for_metric(metric: Metric) -> Self {
        Self::new(metric.domain(), metric.scheme())
    }

    /// Color for `value`; values outside the domain clamp to the ends.
    /// Returns `None` for NaN.
    pub fn color(&self, value: f64) -> Option<Rgb> {
        if value.is_nan() {
            return None;
        }
        let (d0, d1) = self.domain;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        Some(interpolate(self.scheme, t))
    }

    /// CSS fill for an optional value, falling back to [`NEUTRAL_FILL`].
    pub fn fill(&self, value: Option<f64>) -> String {
        value
            .and_then(|v| self.color(v))
            .map(|c| c.to_string())
            .unwrap_or_else(|| NEUTRAL_FILL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMES: [ColorScheme; 6] = [
        ColorScheme::Greens,
        ColorScheme::Reds,
        ColorScheme::Oranges,
        ColorScheme::Purples,
        ColorScheme::OrRd,
        ColorScheme::Blues,
    ];

    #[test]
    fn domain_ends_map_to_scheme_ends() {
        for metric in Metric::ALL {
            let scale = SequentialScale::for_metric(metric);
            let colors = ramp(metric.scheme());
            let (lo, hi) = metric.domain();
            assert_eq!(scale.color(lo), Some(colors[0]), "metric {}", metric);
            assert_eq!(scale.color(hi), Some(colors[8]), "metric {}", metric);
        }
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let scale = SequentialScale::for_metric(Metric::LifeExpectancy);
        assert_eq!(scale.color(10.0), scale.color(70.0));
        assert_eq!(scale.color(120.0), scale.color(85.0));
        assert_eq!(scale.color(f64::INFINITY), scale.color(85.0));
    }

    #[test]
    fn nan_has_no_color() {
        let scale = SequentialScale::for_metric(Metric::Diabetes);
        assert_eq!(scale.color(f64::NAN), None);
        assert_eq!(scale.fill(Some(f64::NAN)), NEUTRAL_FILL);
        assert_eq!(scale.fill(None), NEUTRAL_FILL);
    }

    #[test]
    fn ramps_darken_monotonically() {
        for scheme in SCHEMES {
            let mut last = u32::MAX;
            for i in 0..=20 {
                let c = interpolate(scheme, i as f64 / 20.0);
                let lightness = c.r as u32 + c.g as u32 + c.b as u32;
                assert!(lightness <= last, "{:?} at step {}", scheme, i);
                last = lightness;
            }
        }
    }

    #[test]
    fn hex_display() {
        assert_eq!(Rgb::hex(0x00441b).to_string(), "#00441b");
        assert_eq!(Rgb { r: 255, g: 0, b: 10 }.to_string(), "#ff000a");
    }
}
