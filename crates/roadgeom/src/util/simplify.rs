//! Ramer–Douglas–Peucker polyline simplification in any fixed dimension.
//!
//! The functions here are pure: every recursion level builds its own result
//! and the caller joins the two halves, dropping the shared split point.
//!
//! Strided access lets callers simplify one channel of an interleaved buffer
//! (e.g. every second point of `[inner0, outer0, inner1, outer1, ...]`)
//! without copying it out first. All returned indices are absolute indices
//! into `points`.

use nalgebra::SVector;

/// Simplify the whole sequence; see [`rdp_indices`].
pub fn rdp<const D: usize>(points: &[SVector<f64, D>], epsilon: f64) -> Vec<SVector<f64, D>> {
    rdp_strided(points, epsilon, 0, 1, None)
}

/// Simplify the strided subsequence `points[start], points[start + step], ...`
/// below `end` (defaults to `points.len()`).
pub fn rdp_strided<const D: usize>(
    points: &[SVector<f64, D>],
    epsilon: f64,
    start: usize,
    step: usize,
    end: Option<usize>,
) -> Vec<SVector<f64, D>> {
    rdp_indices(points, epsilon, start, step, end)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Indices of the points kept by RDP on the strided range.
///
/// Post:
/// - empty range → empty; single point → that point;
/// - otherwise the first and last point of the range are always kept, and
///   every dropped point lies within `epsilon` of the chord of the kept
///   segment that spans it.
pub fn rdp_indices<const D: usize>(
    points: &[SVector<f64, D>],
    epsilon: f64,
    start: usize,
    step: usize,
    end: Option<usize>,
) -> Vec<usize> {
    let step = step.max(1);
    let end = end.unwrap_or(points.len()).min(points.len());
    if start >= end {
        return Vec::new();
    }
    let last = (end - start - 1) / step * step + start;
    if last == start {
        return vec![start];
    }

    let (d_max, split) = farthest_from_chord(points, start, last, step);

    // split == start means no interior point off the chord (or no interior point).
    if split != start && d_max > epsilon {
        let mut head = rdp_indices(points, epsilon, start, step, Some(split + 1));
        let tail = rdp_indices(points, epsilon, split, step, Some(end));
        head.pop();
        head.extend(tail);
        head
    } else {
        vec![start, last]
    }
}

/// Largest perpendicular distance of an interior point to the chord
/// `points[start] → points[last]`, and its index.
fn farthest_from_chord<const D: usize>(
    points: &[SVector<f64, D>],
    start: usize,
    last: usize,
    step: usize,
) -> (f64, usize) {
    let origin = points[start];
    // Zero-length chord: zero direction, so the distance is the full displacement.
    let dir = (points[last] - origin)
        .try_normalize(0.0)
        .unwrap_or_else(SVector::zeros);

    let mut d_max = 0.0;
    let mut d_max_idx = start;
    for idx in (start + step..last).step_by(step) {
        let pv = points[idx] - origin;
        let d = (pv - dir * dir.dot(&pv)).norm();
        if d > d_max {
            d_max = d;
            d_max_idx = idx;
        }
    }
    (d_max, d_max_idx)
}
