//! Ladder triangulation between two index-aligned border polylines.

use nalgebra::Vector3;

use crate::types::{GeomError, Mesh3};

/// Build a strip mesh connecting `inner_border` and `outer_border`.
///
/// Pre: both borders were sampled at the same parameter values, so
/// `outer[i]` corresponds to `inner[i]`. Only the lengths are checked.
///
/// Vertex layout: `outer` forward, then `inner` reversed (`2n` vertices).
/// Each of the `n - 1` ladder steps emits the triangles
/// `(l, l-1, r+1)` and `(r, l, r+1)`.
pub fn generate_mesh_from_borders(
    inner_border: &[Vector3<f64>],
    outer_border: &[Vector3<f64>],
) -> Result<Mesh3, GeomError> {
    if inner_border.len() != outer_border.len() {
        return Err(GeomError::BorderLengthMismatch {
            inner: inner_border.len(),
            outer: outer_border.len(),
        });
    }

    let mut vertices = Vec::with_capacity(2 * outer_border.len());
    vertices.extend_from_slice(outer_border);
    vertices.extend(inner_border.iter().rev());

    let num_pts = vertices.len();
    let half = num_pts / 2;
    let mut indices = Vec::with_capacity(6 * half.saturating_sub(1));
    for l in 1..half {
        let r = num_pts - 1 - l;
        indices.extend_from_slice(&[l, l - 1, r + 1, r, l, r + 1]);
    }

    Ok(Mesh3 { vertices, indices })
}
