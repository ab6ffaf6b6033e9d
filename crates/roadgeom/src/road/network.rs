//! Road arena keyed by id; iteration is ascending by id.

use std::collections::BTreeMap;

use super::frame::Road;
use super::types::{JunctionId, RoadError, RoadId};

#[derive(Clone, Debug, Default)]
pub struct RoadNetwork {
    roads: BTreeMap<RoadId, Road>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a road; ids must be unique.
    pub fn insert(&mut self, road: Road) -> Result<(), RoadError> {
        let id = road.id();
        if self.roads.contains_key(&id) {
            return Err(RoadError::DuplicateRoad(id));
        }
        tracing::debug!(road = id.0, length = road.length(), "insert road");
        self.roads.insert(id, road);
        Ok(())
    }

    #[inline]
    pub fn get(&self, id: RoadId) -> Option<&Road> {
        self.roads.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: RoadId) -> Option<&mut Road> {
        self.roads.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Road> + '_ {
        self.roads.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = RoadId> + '_ {
        self.roads.keys().copied()
    }

    /// Roads belonging to junction `junction`, ascending by id.
    pub fn roads_in_junction(&self, junction: JunctionId) -> impl Iterator<Item = &Road> + '_ {
        self.roads
            .values()
            .filter(move |road| road.junction() == Some(junction))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}
