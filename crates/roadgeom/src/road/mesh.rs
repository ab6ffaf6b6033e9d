//! Sampled road geometry: border polylines, surface strips and bounds.

use nalgebra::Vector3;
use std::collections::BTreeSet;

use super::frame::Road;
use super::types::RoadError;
use crate::cfg::SampleCfg;
use crate::types::{Box2, Mesh3};
use crate::util::{generate_mesh_from_borders, get_bbox_for_s_values, rdp_indices, sample_range};

impl Road {
    /// Arc-lengths every `<= step` over `[0, length]`, endpoints included.
    pub fn sample_s_values(&self, step: f64) -> Vec<f64> {
        sample_range(0.0, self.length(), step)
    }

    /// Points at constant `(t, z)` for each arc-length in `s_values`.
    pub fn border_line(&self, t: f64, z: f64, s_values: &[f64]) -> Vec<Vector3<f64>> {
        s_values.iter().map(|&s| self.get_xyz(s, t, z)).collect()
    }

    /// Strip mesh between the constant lateral offsets `t_inner` and `t_outer`.
    ///
    /// Both borders are sampled at the same arc-lengths; an arc-length is kept
    /// if RDP (`cfg.simplify_eps`) keeps it on either border, so the two
    /// polylines stay index-aligned for stitching.
    pub fn surface_mesh(
        &self,
        t_inner: f64,
        t_outer: f64,
        cfg: &SampleCfg,
    ) -> Result<Mesh3, RoadError> {
        let s_values = self.sample_s_values(cfg.step);
        let inner = self.border_line(t_inner, 0.0, &s_values);
        let outer = self.border_line(t_outer, 0.0, &s_values);

        let keep: BTreeSet<usize> = rdp_indices(&inner, cfg.simplify_eps, 0, 1, None)
            .into_iter()
            .chain(rdp_indices(&outer, cfg.simplify_eps, 0, 1, None))
            .collect();
        let inner: Vec<_> = keep.iter().map(|&i| inner[i]).collect();
        let outer: Vec<_> = keep.iter().map(|&i| outer[i]).collect();

        let mesh = generate_mesh_from_borders(&inner, &outer)?;
        tracing::debug!(
            road = self.id().0,
            samples = s_values.len(),
            kept = keep.len(),
            triangles = mesh.num_triangles(),
            "surface mesh"
        );
        Ok(mesh)
    }

    /// Plan-view bounds of the reference curve (t = 0) sampled every `cfg.step`.
    pub fn bbox(&self, cfg: &SampleCfg) -> Result<Box2, RoadError> {
        let s_values = self.sample_s_values(cfg.step);
        Ok(get_bbox_for_s_values(&s_values, |s| {
            self.get_xyz(s, 0.0, 0.0).xy()
        })?)
    }
}
