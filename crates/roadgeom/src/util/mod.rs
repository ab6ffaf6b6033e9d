//! Numeric toolkit reused by every sampled geometry.
//!
//! - `search`: golden-section minimization (closest-parameter queries).
//! - `simplify`: Ramer–Douglas–Peucker on D-dimensional point sequences.
//! - `bbox`: bounding boxes from parameter samples.
//! - `stitch`: strip meshes from two border polylines.
//!
//! Nothing here knows about roads; `crate::road` and `crate::refline` are the
//! main callers.

mod bbox;
mod search;
mod simplify;
mod stitch;

pub use bbox::get_bbox_for_s_values;
pub use search::golden_section_search;
pub use simplify::{rdp, rdp_indices, rdp_strided};
pub use stitch::generate_mesh_from_borders;

use crate::cfg::MAX_SAMPLES;

/// Evenly spaced parameters on `[start, end]` with spacing `<= step`.
///
/// Both endpoints are always included (a single value if `end <= start`).
/// A non-positive or non-finite `step`, or a non-finite interval, yields just
/// the endpoints. At most `MAX_SAMPLES + 1` values are produced; a finer `step`
/// is coarsened to fit.
pub fn sample_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    if end <= start {
        return vec![start];
    }
    if !(step.is_finite() && step > 0.0 && start.is_finite() && end.is_finite()) {
        return vec![start, end];
    }
    let wanted = ((end - start) / step).ceil().max(1.0);
    if wanted > MAX_SAMPLES as f64 {
        tracing::warn!(
            start,
            end,
            step,
            max = MAX_SAMPLES,
            "sample step too fine, coarsened"
        );
    }
    let n = wanted.min(MAX_SAMPLES as f64) as usize;
    let h = (end - start) / n as f64;
    let mut out: Vec<f64> = (0..n).map(|i| start + h * i as f64).collect();
    out.push(end);
    out
}
