//! Plain value types shared by every geometry in the crate.
//!
//! - `Mesh3`: vertex buffer plus flat triangle index list.
//! - `Box2`: axis-aligned 2D box with cached center and extents.
//! - `GeomError`: failures of the numeric utilities in `crate::util`.

use nalgebra::{Vector2, Vector3};
use std::fmt::{self, Write as _};

/// Triangle mesh in R³.
///
/// Invariants:
/// - `indices.len() % 3 == 0`.
/// - Every index is `< vertices.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh3 {
    pub vertices: Vec<Vector3<f64>>,
    pub indices: Vec<usize>,
}

impl Mesh3 {
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append `other`, shifting its indices past the current vertex buffer.
    pub fn add_mesh(&mut self, other: &Mesh3) {
        let offset = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }

    /// Wavefront OBJ text (1-based face indices).
    pub fn to_obj(&self) -> String {
        let mut out = String::with_capacity(32 * (self.vertices.len() + self.num_triangles()));
        for v in &self.vertices {
            let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
        }
        for tri in self.indices.chunks_exact(3) {
            let _ = writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1);
        }
        out
    }
}

/// Axis-aligned box in R².
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
    pub center: Vector2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Box2 {
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self {
            min,
            max,
            center: (min + max) * 0.5,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Euclidean distance from `pt` to the box; zero inside or on the boundary.
    pub fn get_distance(&self, pt: Vector2<f64>) -> f64 {
        let dx = (self.min.x - pt.x).max(pt.x - self.max.x).max(0.0);
        let dy = (self.min.y - pt.y).max(pt.y - self.max.y).max(0.0);
        dx.hypot(dy)
    }

    #[inline]
    pub fn contains(&self, pt: Vector2<f64>) -> bool {
        self.get_distance(pt) == 0.0
    }
}

impl Default for Box2 {
    fn default() -> Self {
        Self::new(Vector2::zeros(), Vector2::zeros())
    }
}

/// Errors surfaced by the numeric utilities.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Border polylines passed to the mesh stitcher differ in length.
    BorderLengthMismatch { inner: usize, outer: usize },
    /// A sampler was asked to reduce an empty parameter sequence.
    EmptySamples,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::BorderLengthMismatch { inner, outer } => write!(
                f,
                "outer and inner border must have equal length (inner={inner}, outer={outer})"
            ),
            GeomError::EmptySamples => write!(f, "cannot compute bounds of an empty sample set"),
        }
    }
}

impl std::error::Error for GeomError {}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn box_derived_fields() {
        let b = Box2::new(vector![-1.0, 2.0], vector![3.0, 5.0]);
        assert_eq!(b.center, vector![1.0, 3.5]);
        assert!((b.width - 4.0).abs() < 1e-12);
        assert!((b.height - 3.0).abs() < 1e-12);
    }

    #[test]
    fn box_distance_inside_and_outside() {
        let b = Box2::new(vector![0.0, 0.0], vector![2.0, 2.0]);
        assert_eq!(b.get_distance(vector![1.0, 1.0]), 0.0);
        assert!(b.contains(vector![2.0, 0.0]));
        assert!((b.get_distance(vector![5.0, 2.0]) - 3.0).abs() < 1e-12);
        // corner region: 3-4-5 triangle
        assert!((b.get_distance(vector![-3.0, -4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn add_mesh_offsets_indices() {
        let tri = Mesh3 {
            vertices: vec![Vector3::zeros(), Vector3::x(), Vector3::y()],
            indices: vec![0, 1, 2],
        };
        let mut m = tri.clone();
        m.add_mesh(&tri);
        assert_eq!(m.vertices.len(), 6);
        assert_eq!(m.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(m.num_triangles(), 2);
    }

    #[test]
    fn obj_export_uses_one_based_faces() {
        let tri = Mesh3 {
            vertices: vec![Vector3::zeros(), Vector3::x(), Vector3::y()],
            indices: vec![0, 1, 2],
        };
        let obj = tri.to_obj();
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 3);
        assert!(obj.lines().any(|l| l == "f 1 2 3"));
    }
}
