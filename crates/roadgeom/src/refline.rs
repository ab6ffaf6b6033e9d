//! Reference curves: the centreline a road's (s, t, z) frame hangs off.
//!
//! - `RefCurve`: the seam the road frame consumes (position, gradient, length).
//! - `RefLine`: plan-view line/arc segments plus an elevation profile.
//!
//! Spirals and parametric cubics are produced upstream; anything that can
//! answer `xyz`/`grad` plugs in through `RefCurve`.

use nalgebra::{Vector2, Vector3};
use std::fmt;

use crate::cfg::{SampleCfg, CURVATURE_EPS};
use crate::spline::CubicSpline;
use crate::types::{Box2, GeomError};
use crate::util::{get_bbox_for_s_values, golden_section_search, sample_range};

/// Arc-length parametrized centreline.
///
/// `grad(s)` need not be normalized; the road frame normalizes it.
pub trait RefCurve: fmt::Debug + Send + Sync {
    fn length(&self) -> f64;
    fn xyz(&self, s: f64) -> Vector3<f64>;
    fn grad(&self, s: f64) -> Vector3<f64>;
}

/// Plan-view shape of one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryKind {
    Line,
    /// Constant curvature (1/radius, positive turns left).
    Arc { curvature: f64 },
}

/// One plan-view segment starting at `s0` with pose `(x0, y0, hdg0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefGeometry {
    pub s0: f64,
    pub x0: f64,
    pub y0: f64,
    pub hdg0: f64,
    pub length: f64,
    pub kind: GeometryKind,
}

impl RefGeometry {
    pub fn line(s0: f64, x0: f64, y0: f64, hdg0: f64, length: f64) -> Self {
        Self {
            s0,
            x0,
            y0,
            hdg0,
            length,
            kind: GeometryKind::Line,
        }
    }

    pub fn arc(s0: f64, x0: f64, y0: f64, hdg0: f64, length: f64, curvature: f64) -> Self {
        Self {
            s0,
            x0,
            y0,
            hdg0,
            length,
            kind: GeometryKind::Arc { curvature },
        }
    }

    /// Planar position and heading at road arc-length `s` (extrapolates).
    pub fn pose(&self, s: f64) -> (Vector2<f64>, f64) {
        let ds = s - self.s0;
        match self.kind {
            GeometryKind::Arc { curvature: k } if k.abs() > CURVATURE_EPS => {
                let hdg = self.hdg0 + k * ds;
                let x = self.x0 + (hdg.sin() - self.hdg0.sin()) / k;
                let y = self.y0 - (hdg.cos() - self.hdg0.cos()) / k;
                (Vector2::new(x, y), hdg)
            }
            _ => {
                let (sin, cos) = self.hdg0.sin_cos();
                (
                    Vector2::new(self.x0 + ds * cos, self.y0 + ds * sin),
                    self.hdg0,
                )
            }
        }
    }
}

/// Line/arc reference line with elevation.
///
/// Invariants:
/// - Segments are sorted by `s0`.
/// - With no segments the line runs along +x from the origin.
#[derive(Clone, Debug, Default)]
pub struct RefLine {
    pub length: f64,
    pub elevation_profile: CubicSpline,
    geometries: Vec<RefGeometry>,
}

impl RefLine {
    pub fn new(length: f64) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Insert a segment keeping `s0` order.
    pub fn add_geometry(&mut self, geom: RefGeometry) {
        let pos = self.geometries.partition_point(|g| g.s0 <= geom.s0);
        self.geometries.insert(pos, geom);
    }

    #[inline]
    pub fn geometries(&self) -> &[RefGeometry] {
        &self.geometries
    }

    /// Segment governing `s`: greatest `s0 <= s`, clamped to the first.
    pub fn geometry_at(&self, s: f64) -> Option<&RefGeometry> {
        let pos = self.geometries.partition_point(|g| g.s0 <= s);
        self.geometries.get(pos.saturating_sub(1))
    }

    fn pose(&self, s: f64) -> (Vector2<f64>, f64) {
        match self.geometry_at(s) {
            Some(g) => g.pose(s),
            None => (Vector2::new(s, 0.0), 0.0),
        }
    }

    /// Arc-length of the point on the line closest to `(x, y)` in plan view.
    ///
    /// Each segment is searched independently by golden section, which
    /// assumes the planar distance is unimodal along it (true for lines and
    /// arcs shorter than a half turn).
    pub fn match_point(&self, x: f64, y: f64, tol: f64) -> f64 {
        let target = Vector2::new(x, y);
        let dist2 = |s: f64| (self.pose(s).0 - target).norm_squared();
        if self.geometries.is_empty() {
            return golden_section_search(dist2, 0.0, self.length, tol);
        }
        let mut best = (f64::INFINITY, 0.0);
        for g in &self.geometries {
            let s_end = (g.s0 + g.length).min(self.length);
            let s = golden_section_search(&dist2, g.s0, s_end, tol);
            let d = dist2(s);
            if d < best.0 {
                best = (d, s);
            }
        }
        best.1
    }

    /// Plan-view bounds from samples every `cfg.step` along `[0, length]`.
    pub fn bbox(&self, cfg: &SampleCfg) -> Result<Box2, GeomError> {
        let s_values = sample_range(0.0, self.length, cfg.step);
        get_bbox_for_s_values(&s_values, |s| self.pose(s).0)
    }

    /// Points every `step` along `[0, length]`.
    pub fn sample(&self, step: f64) -> Vec<Vector3<f64>> {
        sample_range(0.0, self.length, step)
            .into_iter()
            .map(|s| self.xyz(s))
            .collect()
    }
}

impl RefCurve for RefLine {
    fn length(&self) -> f64 {
        self.length
    }

    fn xyz(&self, s: f64) -> Vector3<f64> {
        let (p, _) = self.pose(s);
        Vector3::new(p.x, p.y, self.elevation_profile.get(s))
    }

    fn grad(&self, s: f64) -> Vector3<f64> {
        let (_, hdg) = self.pose(s);
        Vector3::new(hdg.cos(), hdg.sin(), self.elevation_profile.get_grad(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::Poly3;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn quarter_circle(radius: f64) -> RefLine {
        let len = radius * FRAC_PI_2;
        let mut rl = RefLine::new(len);
        rl.add_geometry(RefGeometry::arc(0.0, 0.0, 0.0, 0.0, len, 1.0 / radius));
        rl
    }

    #[test]
    fn line_then_arc_is_continuous() {
        let mut rl = RefLine::new(10.0 + 5.0 * PI);
        rl.add_geometry(RefGeometry::line(0.0, 0.0, 0.0, 0.0, 10.0));
        rl.add_geometry(RefGeometry::arc(10.0, 10.0, 0.0, 0.0, 5.0 * PI, 0.2));
        let before = rl.xyz(10.0 - 1e-9);
        let after = rl.xyz(10.0);
        assert!((before - after).norm() < 1e-8);
        // half turn of radius 5 ends at (10, 10) heading -x
        let end = rl.xyz(rl.length);
        assert!((end - Vector3::new(10.0, 10.0, 0.0)).norm() < 1e-9);
        let g = rl.grad(rl.length);
        assert!((g - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn arc_positions_lie_on_circle() {
        let rl = quarter_circle(4.0);
        let center = Vector2::new(0.0, 4.0);
        for s in sample_range(0.0, rl.length, 0.3) {
            let p = rl.xyz(s);
            assert!(((p.xy() - center).norm() - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn elevation_feeds_z_and_gradient() {
        let mut rl = RefLine::new(20.0);
        rl.add_geometry(RefGeometry::line(0.0, 0.0, 0.0, 0.0, 20.0));
        rl.elevation_profile = CubicSpline::from_poly(0.0, Poly3::new(1.0, 0.1, 0.0, 0.0));
        let p = rl.xyz(10.0);
        assert!((p - Vector3::new(10.0, 0.0, 2.0)).norm() < 1e-12);
        assert!((rl.grad(10.0).z - 0.1).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_past_both_ends() {
        let mut rl = RefLine::new(5.0);
        rl.add_geometry(RefGeometry::line(0.0, 1.0, 2.0, FRAC_PI_2, 5.0));
        assert!((rl.xyz(-1.0) - Vector3::new(1.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((rl.xyz(7.0) - Vector3::new(1.0, 9.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn match_point_recovers_arc_length() {
        let rl = quarter_circle(10.0);
        let target = rl.xyz(7.3);
        // push the query point off the line along the radius
        let offset = (target.xy() - Vector2::new(0.0, 10.0)) * 0.2;
        let s = rl.match_point(target.x + offset.x, target.y + offset.y, 1e-10);
        assert!((s - 7.3).abs() < 1e-6);
    }

    #[test]
    fn bbox_of_quarter_circle() {
        let rl = quarter_circle(2.0);
        let b = rl.bbox(&SampleCfg::default()).unwrap();
        assert!(b.min.x.abs() < 1e-12 && b.min.y.abs() < 1e-12);
        assert!((b.max.x - 2.0).abs() < 1e-3);
        assert!((b.max.y - 2.0).abs() < 1e-12);
    }
}
