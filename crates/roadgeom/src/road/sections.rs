//! Cross-sections (lane sections) and their arc-length index.

use std::collections::BTreeMap;

use super::types::{RoadError, RoadId};
use crate::spline::CubicSpline;

/// One lane of a cross-section.
///
/// Borders are lateral offsets `t(s)` produced by the upstream width stacking;
/// for left lanes (`id > 0`) `outer_border >= inner_border`, for right lanes the
/// opposite. The centre lane (`id == 0`) has coincident borders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lane {
    pub id: i32,
    /// Owning road; stamped by [`LaneSection::insert_lane`].
    pub road: RoadId,
    pub kind: String,
    pub inner_border: CubicSpline,
    pub outer_border: CubicSpline,
}

impl Lane {
    pub fn new(
        id: i32,
        kind: impl Into<String>,
        inner_border: CubicSpline,
        outer_border: CubicSpline,
    ) -> Self {
        Self {
            id,
            road: RoadId::default(),
            kind: kind.into(),
            inner_border,
            outer_border,
        }
    }

    /// Closed lateral interval covered at `s`.
    pub fn t_range(&self, s: f64) -> (f64, f64) {
        let (a, b) = (self.inner_border.get(s), self.outer_border.get(s));
        (a.min(b), a.max(b))
    }

    #[inline]
    pub fn contains(&self, s: f64, t: f64) -> bool {
        let (lo, hi) = self.t_range(s);
        lo <= t && t <= hi
    }

    #[inline]
    pub fn width(&self, s: f64) -> f64 {
        let (lo, hi) = self.t_range(s);
        hi - lo
    }
}

/// Fixed lane layout valid from `s0` up to the next section (or road end).
#[derive(Clone, Debug, PartialEq)]
pub struct LaneSection {
    /// Owning road (id lookup, not a handle).
    pub road: RoadId,
    pub s0: f64,
    pub lanes: BTreeMap<i32, Lane>,
}

impl LaneSection {
    pub fn new(road: RoadId, s0: f64) -> Self {
        Self {
            road,
            s0,
            lanes: BTreeMap::new(),
        }
    }

    /// Insert or replace a lane under this section's road; returns the
    /// replaced one.
    pub fn insert_lane(&mut self, mut lane: Lane) -> Option<Lane> {
        lane.road = self.road;
        self.lanes.insert(lane.id, lane)
    }

    #[inline]
    pub fn get_lane_by_id(&self, id: i32) -> Option<&Lane> {
        self.lanes.get(&id)
    }

    /// Lane whose lateral interval at `s` contains `t`.
    ///
    /// Shared borders resolve to the lane nearer the centre; `None` when `t`
    /// lies outside every lane.
    pub fn lane_at(&self, s: f64, t: f64) -> Option<&Lane> {
        self.lanes
            .values()
            .filter(|lane| lane.contains(s, t))
            .min_by_key(|lane| lane.id.abs())
    }
}

/// Sections of one road ordered by start arc-length.
///
/// Invariants:
/// - Keys strictly increasing, first key `>= 0`, every key `< length`.
/// - Section `i` governs `[key_i, key_{i+1})`; the last one runs to `length`.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneSectionIndex {
    road: RoadId,
    length: f64,
    sections: Vec<LaneSection>,
}

impl LaneSectionIndex {
    pub fn new(road: RoadId, length: f64) -> Self {
        Self {
            road,
            length,
            sections: Vec::new(),
        }
    }

    /// Create the section starting at `s0` and return it for population.
    pub fn insert(&mut self, s0: f64) -> Result<&mut LaneSection, RoadError> {
        let road = self.road;
        if !(s0.is_finite() && s0 >= 0.0) {
            return Err(RoadError::InvalidSectionKey { road, s0 });
        }
        if s0 >= self.length {
            return Err(RoadError::SectionOutOfRange {
                road,
                s0,
                length: self.length,
            });
        }
        let pos = self.sections.partition_point(|sec| sec.s0 < s0);
        if self.sections.get(pos).is_some_and(|sec| sec.s0 == s0) {
            return Err(RoadError::DuplicateSectionKey { road, s0 });
        }
        tracing::trace!(road = road.0, s0, "insert lane section");
        self.sections.insert(pos, LaneSection::new(road, s0));
        Ok(&mut self.sections[pos])
    }

    /// Section governing `s`: greatest key `<= s`.
    ///
    /// `s` below the first key clamps to the first section; past the last key
    /// (including past the road end) resolves to the last section.
    pub fn get(&self, s: f64) -> Result<&LaneSection, RoadError> {
        let pos = self.sections.partition_point(|sec| sec.s0 <= s);
        if pos == 0 {
            let first = self
                .sections
                .first()
                .ok_or(RoadError::NoLaneSections { road: self.road })?;
            tracing::debug!(road = self.road.0, s, s0 = first.s0, "clamped to first lane section");
            return Ok(first);
        }
        Ok(&self.sections[pos - 1])
    }

    /// Mutable access to the section starting exactly at `s0`.
    pub fn get_mut(&mut self, s0: f64) -> Option<&mut LaneSection> {
        let pos = self.sections.partition_point(|sec| sec.s0 < s0);
        self.sections.get_mut(pos).filter(|sec| sec.s0 == s0)
    }

    /// Validity interval `[s0, s_end)` of the section starting at `s0`.
    pub fn s_range(&self, s0: f64) -> Option<(f64, f64)> {
        let pos = self.sections.partition_point(|sec| sec.s0 < s0);
        let sec = self.sections.get(pos).filter(|sec| sec.s0 == s0)?;
        let s_end = self.sections.get(pos + 1).map_or(self.length, |next| next.s0);
        Some((sec.s0, s_end))
    }

    #[inline]
    pub fn road(&self) -> RoadId {
        self.road
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn sections(&self) -> &[LaneSection] {
        &self.sections
    }

    pub fn keys(&self) -> Vec<f64> {
        self.sections.iter().map(|sec| sec.s0).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
