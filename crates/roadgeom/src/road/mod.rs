//! Roads: the (s, t, z) coordinate frame, cross-section lookup and the
//! network arena.
//!
//! Layout
//! - `types.rs`: ids and `RoadError`.
//! - `frame.rs`: `Road` and its transformation matrix / `get_xyz`.
//! - `sections.rs`: `Lane`, `LaneSection`, `LaneSectionIndex`.
//! - `mesh.rs`: sampling, surface strips and bounds built on `crate::util`.
//! - `network.rs`: `RoadNetwork`, roads keyed by id.
//!
//! Cross-sections and lanes refer back to their road by `RoadId` only, so a
//! populated network is a plain tree of owned values and can be shared
//! read-only across threads.

mod frame;
mod mesh;
mod network;
mod sections;
mod types;

pub use frame::Road;
pub use network::RoadNetwork;
pub use sections::{Lane, LaneSection, LaneSectionIndex};
pub use types::{JunctionId, RoadError, RoadId};
