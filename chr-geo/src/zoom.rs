//! Pan/zoom transform for the map layer.
//!
//! Mirrors d3-zoom: a point `p` in map space is drawn at `k * p + (x, y)`,
//! wheel zoom keeps the point under the pointer fixed, and the scale is
//! clamped to an extent.

/// Default scale extent of the map.
pub const SCALE_EXTENT: (f64, f64) = (1.0, 8.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform { k: 1.0, x: 0.0, y: 0.0 };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Screen position of a map-space point.
    pub fn apply(&self, (px, py): (f64, f64)) -> (f64, f64) {
        (px * self.k + self.x, py * self.k + self.y)
    }

    /// Map-space position of a screen point.
    pub fn invert(&self, (sx, sy): (f64, f64)) -> (f64, f64) {
        ((sx - self.x) / self.k, (sy - self.y) / self.k)
    }

    /// Scale by `factor` around the screen point `anchor`, clamping the
    /// resulting scale to `extent`.
    pub fn zoom_at(&self, factor: f64, anchor: (f64, f64), extent: (f64, f64)) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return *self;
        }
        let k = (self.k * factor).clamp(extent.0, extent.1);
        let (mx, my) = self.invert(anchor);
        ZoomTransform {
            k,
            x: anchor.0 - mx * k,
            y: anchor.1 - my * k,
        }
    }

    pub fn pan(&self, dx: f64, dy: f64) -> Self {
        ZoomTransform {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// SVG `transform` attribute value.
    pub fn to_svg_transform(&self) -> String {
        format!("translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

/// Scale factor for one wheel event, as d3-zoom computes it.
///
/// `delta_mode` is the DOM `WheelEvent.deltaMode`: 0 pixels, 1 lines,
/// 2 pages. Holding ctrl (pinch gestures on trackpads) zooms ten times faster.
pub fn wheel_factor(delta_y: f64, delta_mode: u32, ctrl: bool) -> f64 {
    let unit = match delta_mode {
        0 => 0.002,
        1 => 0.05,
        _ => 1.0,
    };
    let delta = -delta_y * unit * if ctrl { 10.0 } else { 1.0 };
    2f64.powf(delta)
}

/// A press-move-release drag that pans the map.
///
/// Once the pointer has moved, the click the browser fires on release
/// belongs to the drag and must not select a county (d3-zoom swallows it
/// the same way).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    last: (f64, f64),
    moved: bool,
}

impl DragGesture {
    /// Pointer pressed at screen position `at`.
    pub fn new(at: (f64, f64)) -> Self {
        DragGesture { last: at, moved: false }
    }

    /// Pointer moved to `to`; returns the screen delta since the last position.
    pub fn move_to(&mut self, to: (f64, f64)) -> (f64, f64) {
        let delta = (to.0 - self.last.0, to.1 - self.last.1);
        if delta != (0.0, 0.0) {
            self.moved = true;
        }
        self.last = to;
        delta
    }

    /// Whether the click following this drag's release should be ignored.
    pub fn swallows_click(&self) -> bool {
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identity_is_default() {
        let t = ZoomTransform::default();
        assert!(t.is_identity());
        assert_eq!(t.apply((3.0, 4.0)), (3.0, 4.0));
        assert_eq!(t.to_svg_transform(), "translate(0,0) scale(1)");
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let t = ZoomTransform::IDENTITY.pan(10.0, 20.0);
        let anchor = (300.0, 200.0);
        let before = t.invert(anchor);
        let z = t.zoom_at(2.0, anchor, SCALE_EXTENT);
        assert!(close(z.k, 2.0));
        let after = z.apply(before);
        assert!(close(after.0, anchor.0) && close(after.1, anchor.1));
    }

    #[test]
    fn scale_is_clamped_to_extent() {
        let t = ZoomTransform::IDENTITY;
        assert!(close(t.zoom_at(100.0, (0.0, 0.0), SCALE_EXTENT).k, 8.0));
        assert!(close(t.zoom_at(0.1, (0.0, 0.0), SCALE_EXTENT).k, 1.0));
        assert_eq!(t.zoom_at(f64::NAN, (0.0, 0.0), SCALE_EXTENT), t);
        assert_eq!(t.zoom_at(0.0, (0.0, 0.0), SCALE_EXTENT), t);
    }

    #[test]
    fn pan_moves_translation_only() {
        let t = ZoomTransform { k: 2.0, x: 1.0, y: 1.0 }.pan(5.0, -3.0);
        assert_eq!(t, ZoomTransform { k: 2.0, x: 6.0, y: -2.0 });
    }

    #[test]
    fn wheel_factor_matches_d3() {
        // scrolling down zooms out, up zooms in
        assert!(wheel_factor(100.0, 0, false) < 1.0);
        assert!(wheel_factor(-100.0, 0, false) > 1.0);
        assert!(close(wheel_factor(-500.0, 0, false), 2.0));
        assert!(close(wheel_factor(-20.0, 1, false), 2.0));
        assert!(close(wheel_factor(-1.0, 2, false), 2.0));
        assert!(close(wheel_factor(-50.0, 0, true), 2.0));
    }

    #[test]
    fn press_and_release_in_place_is_a_click() {
        let mut drag = DragGesture::new((40.0, 50.0));
        assert_eq!(drag.move_to((40.0, 50.0)), (0.0, 0.0));
        assert!(!drag.swallows_click());
    }

    #[test]
    fn any_movement_swallows_the_click() {
        let mut drag = DragGesture::new((40.0, 50.0));
        assert_eq!(drag.move_to((43.0, 46.0)), (3.0, -4.0));
        assert_eq!(drag.move_to((44.0, 46.0)), (1.0, 0.0));
        assert!(drag.swallows_click());
    }

    #[test]
    fn returning_to_the_press_point_still_swallows_the_click() {
        let mut drag = DragGesture::new((10.0, 10.0));
        drag.move_to((30.0, 10.0));
        assert_eq!(drag.move_to((10.0, 10.0)), (-20.0, 0.0));
        assert!(drag.swallows_click());
    }
}
