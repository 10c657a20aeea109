use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{
    graph::{DistanceGraph, TripGraph},
    place::{PlaceCategory, PlaceId},
};

/// limits for the edges added on top of the reconstructed spanning tree.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectivityConfig {
    /// attractions attached to a start node that has no neighbors.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
    /// nodes with fewer neighbors than this are backfilled.
    #[serde(default = "default_min_degree")]
    pub min_degree: usize,
    /// maximum edges added for any one node during backfill.
    #[serde(default = "default_per_node_cap")]
    pub per_node_cap: usize,
    /// maximum edges added by backfill overall.
    #[serde(default = "default_max_new_edges")]
    pub max_new_edges: usize,
}

fn default_seed_count() -> usize {
    4
}

fn default_min_degree() -> usize {
    2
}

fn default_per_node_cap() -> usize {
    3
}

fn default_max_new_edges() -> usize {
    800
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            seed_count: default_seed_count(),
            min_degree: default_min_degree(),
            per_node_cap: default_per_node_cap(),
            max_new_edges: default_max_new_edges(),
        }
    }
}

/// runs seeding and then backfill. returns the total number of edges added.
pub fn augment(
    start: &PlaceId,
    graph: &mut TripGraph,
    distances: &DistanceGraph,
    config: &ConnectivityConfig,
) -> usize {
    let seeded = seed_start_node(start, graph, distances, config.seed_count);
    let backfilled = backfill_edges(graph, distances, config);
    log::info!("connectivity repair added {seeded} seed and {backfilled} backfill edges");
    log::debug!(
        "trip graph has {} nodes and {} edges",
        graph.len(),
        graph.edge_count()
    );
    seeded + backfilled
}

/// if the start node has no neighbors, connects it to up to `seed_count` of
/// its nearest attractions in the distance graph. returns the number of
/// edges added.
pub fn seed_start_node(
    start: &PlaceId,
    graph: &mut TripGraph,
    distances: &DistanceGraph,
    seed_count: usize,
) -> usize {
    if graph.degree(start) > 0 || seed_count == 0 {
        return 0;
    }
    let mut added = 0;
    for (neighbor, _) in distances.nearest(start, PlaceCategory::Attraction) {
        if graph.add_undirected_edge(*start, neighbor) {
            added += 1;
            if added >= seed_count {
                break;
            }
        }
    }
    log::debug!("seeded start node {start} with {added} attraction edges");
    added
}

/// raises the degree of sparse attraction nodes using their nearest
/// attraction neighbors from the distance graph.
///
/// candidates are the attraction nodes of either graph, visited in ascending
/// id order so the edges chosen are reproducible. each node below
/// `min_degree` gets at most `per_node_cap` new edges and the whole pass
/// stops after `max_new_edges`. returns the number of edges added.
pub fn backfill_edges(
    graph: &mut TripGraph,
    distances: &DistanceGraph,
    config: &ConnectivityConfig,
) -> usize {
    let candidates: BTreeSet<PlaceId> = graph
        .nodes()
        .copied()
        .chain(distances.nodes())
        .filter(|id| id.is_attraction())
        .collect();

    let mut new_edges = 0;
    for node in candidates.iter() {
        if new_edges >= config.max_new_edges {
            break;
        }
        if graph.degree(node) >= config.min_degree {
            continue;
        }
        let mut added_here = 0;
        for (neighbor, _) in distances.nearest(node, PlaceCategory::Attraction) {
            if added_here >= config.per_node_cap || new_edges >= config.max_new_edges {
                break;
            }
            if graph.contains_edge(node, &neighbor) {
                continue;
            }
            if graph.add_undirected_edge(*node, neighbor) {
                added_here += 1;
                new_edges += 1;
            }
        }
    }
    new_edges
}
