use std::collections::HashMap;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::model::place::{PlaceCategory, PlaceId, PlaceIdError};

/// one outgoing edge of the backend `/distances` response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DistanceRecord {
    pub to: String,
    pub distance: f64,
}

/// raw `/distances` payload, keyed by source place id.
pub type DistanceRecords = HashMap<String, Vec<DistanceRecord>>;

/// pairwise travel distances between places, stored as directed edges in the
/// order the backend produced them. symmetry is not validated; callers that
/// need a distance for a missing edge supply their own default.
#[derive(Clone, Debug, Default)]
pub struct DistanceGraph(HashMap<PlaceId, Vec<(PlaceId, f64)>>);

impl DistanceGraph {
    pub fn new(adjacency: HashMap<PlaceId, Vec<(PlaceId, f64)>>) -> DistanceGraph {
        DistanceGraph(adjacency)
    }

    /// outgoing edges of a node, empty if the node is unknown.
    pub fn neighbors(&self, id: &PlaceId) -> &[(PlaceId, f64)] {
        self.0.get(id).map(|v| v.as_slice()).unwrap_or_default()
    }

    /// weight of the directed edge `from -> to`, if measured.
    pub fn distance(&self, from: &PlaceId, to: &PlaceId) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, d)| *d)
    }

    /// weight of the directed edge `from -> to`, or `default` when it was
    /// never measured.
    pub fn distance_or(&self, from: &PlaceId, to: &PlaceId, default: f64) -> f64 {
        self.distance(from, to).unwrap_or(default)
    }

    /// neighbors of `from` in the given category, nearest first. equal
    /// distances are ordered by place id.
    pub fn nearest(&self, from: &PlaceId, category: PlaceCategory) -> Vec<(PlaceId, f64)> {
        self.neighbors(from)
            .iter()
            .filter(|(target, _)| target.category == category)
            .copied()
            .sorted_by_key(|(target, d)| (OrderedFloat(*d), *target))
            .collect_vec()
    }

    /// source node ids, sorted.
    pub fn nodes(&self) -> Vec<PlaceId> {
        self.0.keys().copied().sorted().collect_vec()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&DistanceRecords> for DistanceGraph {
    type Error = PlaceIdError;

    fn try_from(value: &DistanceRecords) -> Result<Self, Self::Error> {
        let mut adjacency: HashMap<PlaceId, Vec<(PlaceId, f64)>> =
            HashMap::with_capacity(value.len());
        for (src, records) in value.iter() {
            let src_id = src.parse::<PlaceId>()?;
            let edges = records
                .iter()
                .map(|r| r.to.parse::<PlaceId>().map(|dst| (dst, r.distance)))
                .collect::<Result<Vec<_>, _>>()?;
            adjacency.entry(src_id).or_default().extend(edges);
        }
        Ok(DistanceGraph(adjacency))
    }
}
