//! Geometric core of an OpenDRIVE-style road network.
//!
//! Turns road coordinates (arc-length `s`, lateral offset `t`, height `z`)
//! into world positions and provides the numeric toolkit every sampled
//! geometry reuses: golden-section search, RDP simplification, bounding
//! boxes from samples and border-to-mesh stitching.
//!
//! Scope
//! - Pure computation over data populated elsewhere (no parsing, no I/O).
//! - Roads are written once, then read concurrently through `&` references.

pub mod cfg;
pub mod refline;
pub mod road;
pub mod spline;
pub mod types;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SampleCfg;
pub use nalgebra::{Matrix3 as Mat3, Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::SampleCfg;
    pub use crate::refline::{GeometryKind, RefCurve, RefGeometry, RefLine};
    pub use crate::road::{
        JunctionId, Lane, LaneSection, LaneSectionIndex, Road, RoadError, RoadId, RoadNetwork,
    };
    pub use crate::spline::{CubicSpline, Poly3};
    pub use crate::types::{Box2, GeomError, Mesh3};
    pub use crate::util::{
        generate_mesh_from_borders, get_bbox_for_s_values, golden_section_search, rdp,
        rdp_indices, rdp_strided, sample_range,
    };
    pub use nalgebra::{Matrix3 as Mat3, Vector2 as Vec2, Vector3 as Vec3};
}
