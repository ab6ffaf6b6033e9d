//! Axis-aligned bounds of a sampled parametric curve.

use nalgebra::Vector2;

use crate::types::{Box2, GeomError};

/// Sample `get_xy` at every value and return the per-axis bounds.
///
/// The corners are axis-wise extrema and need not be sampled points
/// themselves (min x and min y may come from different samples).
pub fn get_bbox_for_s_values<T, F>(s_values: &[T], get_xy: F) -> Result<Box2, GeomError>
where
    T: Copy,
    F: Fn(T) -> Vector2<f64>,
{
    let mut points = s_values.iter().map(|&s| get_xy(s));
    let first = points.next().ok_or(GeomError::EmptySamples)?;
    let (min, max) = points.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p)));
    Ok(Box2::new(min, max))
}
