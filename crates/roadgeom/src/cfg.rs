//! Sampling and tolerance defaults.
//!
//! Policy
//! - Fixed numeric guards are module constants; values callers routinely
//!   tune (sampling step, simplification tolerance) live in `SampleCfg`.

/// Below this norm a gradient or lateral axis counts as degenerate.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;
/// Curvature magnitude below which an arc is evaluated as a straight line.
pub(crate) const CURVATURE_EPS: f64 = 1e-12;
/// Upper bound on the number of intervals `sample_range` subdivides into.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Sampling configuration for polylines, meshes and bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    /// Arc-length spacing between raw samples.
    pub step: f64,
    /// RDP tolerance applied to sampled border polylines.
    pub simplify_eps: f64,
    /// Bracket tolerance for golden-section parameter searches.
    pub search_tol: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            step: 0.5,
            simplify_eps: 0.01,
            search_tol: 1e-8,
        }
    }
}
