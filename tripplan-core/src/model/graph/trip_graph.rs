use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::model::place::PlaceId;

pub type TripAdjacency = IndexMap<PlaceId, IndexSet<PlaceId>>;

/// undirected adjacency used for itinerary traversal.
///
/// nodes and neighbor lists keep insertion order, which is the order the
/// assembler walks them in. neighbors are deduplicated and self-loops are
/// never stored.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TripGraph(TripAdjacency);

impl TripGraph {
    pub fn new() -> TripGraph {
        TripGraph(IndexMap::new())
    }

    /// registers a node without adding any edges.
    pub fn add_node(&mut self, id: PlaceId) {
        self.0.entry(id).or_default();
    }

    /// creates the relations a->b and b->a. returns false when the edge is a
    /// self-loop or is already present.
    pub fn add_undirected_edge(&mut self, a: PlaceId, b: PlaceId) -> bool {
        if a == b {
            return false;
        }
        let inserted_fwd = self.0.entry(a).or_default().insert(b);
        let inserted_rev = self.0.entry(b).or_default().insert(a);
        inserted_fwd || inserted_rev
    }

    pub fn contains_node(&self, id: &PlaceId) -> bool {
        self.0.contains_key(id)
    }

    pub fn contains_edge(&self, a: &PlaceId, b: &PlaceId) -> bool {
        self.0.get(a).map(|n| n.contains(b)).unwrap_or_default()
    }

    pub fn neighbors(&self, id: &PlaceId) -> Option<&IndexSet<PlaceId>> {
        self.0.get(id)
    }

    /// the neighbor at a position in insertion order.
    pub fn neighbor_at(&self, id: &PlaceId, index: usize) -> Option<PlaceId> {
        self.0.get(id).and_then(|n| n.get_index(index)).copied()
    }

    pub fn degree(&self, id: &PlaceId) -> usize {
        self.0.get(id).map(|n| n.len()).unwrap_or_default()
    }

    /// node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &PlaceId> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.0.values().map(|n| n.len()).sum::<usize>() / 2
    }
}
