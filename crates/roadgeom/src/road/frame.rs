//! `Road`: reference curve plus lateral profiles, and the (s, t, z) frame.
//!
//! Frame convention
//! - Columns of `get_transformation_matrix(s)` are `(e_s, e_t, e_h)`: tangent,
//!   lateral (left-positive, rolled by superelevation) and up.
//! - `get_xyz(s, t, z) = ref_line.xyz(s) + M(s) · (0, t + lane_offset(s), z)`.
//! - Queries outside `[0, length]` extrapolate the curve and the profiles.

use nalgebra::{Matrix3, Vector3};
use std::sync::Arc;

use super::sections::{Lane, LaneSection, LaneSectionIndex};
use super::types::{JunctionId, RoadError, RoadId};
use crate::cfg::DEGENERATE_EPS;
use crate::refline::RefCurve;
use crate::spline::CubicSpline;

/// A road: identity, reference curve, lateral profiles and cross-sections.
///
/// Populated once (profiles assigned, sections inserted) and read-only after.
#[derive(Clone, Debug)]
pub struct Road {
    id: RoadId,
    junction: Option<JunctionId>,
    length: f64,
    pub lane_offset: CubicSpline,
    /// Roll angle (radians) about the tangent.
    pub superelevation: CubicSpline,
    pub ref_line: Arc<dyn RefCurve>,
    s0_to_lanesection: LaneSectionIndex,
}

impl Road {
    pub fn new(
        length: f64,
        id: RoadId,
        junction: Option<JunctionId>,
        ref_line: Arc<dyn RefCurve>,
    ) -> Result<Self, RoadError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(RoadError::InvalidLength(length));
        }
        Ok(Self {
            id,
            junction,
            length,
            lane_offset: CubicSpline::new(),
            superelevation: CubicSpline::new(),
            ref_line,
            s0_to_lanesection: LaneSectionIndex::new(id, length),
        })
    }

    #[inline]
    pub fn id(&self) -> RoadId {
        self.id
    }
    #[inline]
    pub fn junction(&self) -> Option<JunctionId> {
        self.junction
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Start a new cross-section at `s0`; see [`LaneSectionIndex::insert`].
    pub fn add_lanesection(&mut self, s0: f64) -> Result<&mut LaneSection, RoadError> {
        self.s0_to_lanesection.insert(s0)
    }

    /// Section index; keyed and bounded by this road's id and length.
    #[inline]
    pub fn lanesection_index(&self) -> &LaneSectionIndex {
        &self.s0_to_lanesection
    }

    /// Section starting exactly at `s0`, for adding lanes after creation.
    pub fn get_lanesection_mut(&mut self, s0: f64) -> Option<&mut LaneSection> {
        self.s0_to_lanesection.get_mut(s0)
    }

    pub fn get_lanesection(&self, s: f64) -> Result<&LaneSection, RoadError> {
        self.s0_to_lanesection.get(s)
    }

    /// Lane at `(s, t)`; `Ok(None)` when `t` is outside every lane.
    pub fn get_lane(&self, s: f64, t: f64) -> Result<Option<&Lane>, RoadError> {
        Ok(self.get_lanesection(s)?.lane_at(s, t))
    }

    pub fn get_lanesections(&self) -> &[LaneSection] {
        self.s0_to_lanesection.sections()
    }

    /// Local rotation basis `(e_s, e_t, e_h)` at `s`.
    pub fn get_transformation_matrix(&self, s: f64) -> Matrix3<f64> {
        let e_s = self
            .ref_line
            .grad(s)
            .try_normalize(DEGENERATE_EPS)
            .unwrap_or_else(Vector3::x);
        let (sin_t, cos_t) = self.superelevation.get(s).sin_cos();

        let e_t = Vector3::new(
            cos_t * -e_s.y + sin_t * -e_s.z * e_s.x,
            cos_t * e_s.x + sin_t * -e_s.z * e_s.y,
            sin_t * (e_s.x * e_s.x + e_s.y * e_s.y),
        )
        .try_normalize(DEGENERATE_EPS)
        // vertical tangent: no heading to roll against
        .unwrap_or_else(Vector3::y);
        let e_h = e_s
            .cross(&e_t)
            .try_normalize(DEGENERATE_EPS)
            .unwrap_or_else(Vector3::z);

        Matrix3::from_columns(&[e_s, e_t, e_h])
    }

    /// World position of road coordinates `(s, t, z)`.
    pub fn get_xyz(&self, s: f64, t: f64, z: f64) -> Vector3<f64> {
        let offset = Vector3::new(0.0, t + self.lane_offset.get(s), z);
        self.ref_line.xyz(s) + self.get_transformation_matrix(s) * offset
    }
}
