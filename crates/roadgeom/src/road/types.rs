//! Identifiers and errors for roads and their cross-sections.

use std::fmt;

use crate::types::GeomError;

/// Road identifier (unique within a network).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoadId(pub i32);

/// Junction group identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JunctionId(pub i32);

impl fmt::Display for RoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors surfaced by road construction and queries.
#[derive(Clone, Debug, PartialEq)]
pub enum RoadError {
    /// Road length must be finite and > 0.
    InvalidLength(f64),
    /// Cross-section lookup on a road without sections.
    NoLaneSections { road: RoadId },
    /// Section key is negative or not finite.
    InvalidSectionKey { road: RoadId, s0: f64 },
    /// Section key is already taken.
    DuplicateSectionKey { road: RoadId, s0: f64 },
    /// Section key is at or past the road end.
    SectionOutOfRange { road: RoadId, s0: f64, length: f64 },
    /// A road with this id is already in the network.
    DuplicateRoad(RoadId),
    Geom(GeomError),
}

impl fmt::Display for RoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadError::InvalidLength(len) => write!(f, "road length must be finite and > 0, got {len}"),
            RoadError::NoLaneSections { road } => write!(f, "road {road} has no lane sections"),
            RoadError::InvalidSectionKey { road, s0 } => {
                write!(f, "road {road}: lane section start {s0} must be finite and >= 0")
            }
            RoadError::DuplicateSectionKey { road, s0 } => {
                write!(f, "road {road}: lane section at s0={s0} already exists")
            }
            RoadError::SectionOutOfRange { road, s0, length } => write!(
                f,
                "road {road}: lane section start {s0} is not below road length {length}"
            ),
            RoadError::DuplicateRoad(id) => write!(f, "road {id} already in network"),
            RoadError::Geom(e) => write!(f, "geometry: {e}"),
        }
    }
}

impl std::error::Error for RoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoadError::Geom(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeomError> for RoadError {
    fn from(e: GeomError) -> Self {
        RoadError::Geom(e)
    }
}
