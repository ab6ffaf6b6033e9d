//! JSON road descriptions for the CLI.
//!
//! The schema mirrors the road model one-to-one: plan-view segments, cubic
//! profiles as `(s0, a, b, c, d)` pieces, and lane sections with precomputed
//! lane borders. Missing profiles default to zero.

use anyhow::{Context, Result};
use roadgeom::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoadDoc {
    pub id: i32,
    #[serde(default)]
    pub junction: Option<i32>,
    pub length: f64,
    pub geometry: Vec<GeometryDoc>,
    #[serde(default)]
    pub elevation: Vec<PolyDoc>,
    #[serde(default)]
    pub lane_offset: Vec<PolyDoc>,
    #[serde(default)]
    pub superelevation: Vec<PolyDoc>,
    #[serde(default)]
    pub sections: Vec<SectionDoc>,
}

/// Plan-view segment; `curvature == 0` is a straight line.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GeometryDoc {
    pub s0: f64,
    pub x: f64,
    pub y: f64,
    pub hdg: f64,
    pub length: f64,
    #[serde(default)]
    pub curvature: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PolyDoc {
    pub s0: f64,
    #[serde(default)]
    pub a: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub d: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SectionDoc {
    pub s0: f64,
    #[serde(default)]
    pub lanes: Vec<LaneDoc>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LaneDoc {
    pub id: i32,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub inner: Vec<PolyDoc>,
    #[serde(default)]
    pub outer: Vec<PolyDoc>,
}

fn spline(pieces: &[PolyDoc]) -> CubicSpline {
    let mut sp = CubicSpline::new();
    for p in pieces {
        sp.insert(p.s0, Poly3::new(p.a, p.b, p.c, p.d));
    }
    sp
}

/// A populated road plus a typed handle on its reference line.
pub struct LoadedRoad {
    pub road: Road,
    pub ref_line: Arc<RefLine>,
}

impl RoadDoc {
    pub fn build(&self) -> Result<LoadedRoad> {
        let mut rl = RefLine::new(self.length);
        for g in &self.geometry {
            let geom = if g.curvature == 0.0 {
                RefGeometry::line(g.s0, g.x, g.y, g.hdg, g.length)
            } else {
                RefGeometry::arc(g.s0, g.x, g.y, g.hdg, g.length, g.curvature)
            };
            rl.add_geometry(geom);
        }
        rl.elevation_profile = spline(&self.elevation);
        let ref_line = Arc::new(rl);

        let mut road = Road::new(
            self.length,
            RoadId(self.id),
            self.junction.map(JunctionId),
            ref_line.clone(),
        )
        .with_context(|| format!("road {}", self.id))?;
        road.lane_offset = spline(&self.lane_offset);
        road.superelevation = spline(&self.superelevation);

        for sec in &self.sections {
            let target = road
                .add_lanesection(sec.s0)
                .with_context(|| format!("road {}: lane section {}", self.id, sec.s0))?;
            for lane in &sec.lanes {
                target.insert_lane(Lane::new(
                    lane.id,
                    lane.kind.clone(),
                    spline(&lane.inner),
                    spline(&lane.outer),
                ));
            }
        }
        tracing::debug!(
            road = self.id,
            segments = self.geometry.len(),
            sections = self.sections.len(),
            "road built"
        );
        Ok(LoadedRoad { road, ref_line })
    }
}

pub fn load_road<P: AsRef<Path>>(path: P) -> Result<LoadedRoad> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: RoadDoc =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    doc.build()
}
