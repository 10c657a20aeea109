mod distance_graph;
mod mst_row;
mod trip_graph;

pub use distance_graph::{DistanceGraph, DistanceRecord, DistanceRecords};
pub use mst_row::{MstRow, ParentLink, ROOT_EDGE};
pub use trip_graph::TripGraph;
