use itertools::Itertools;

use crate::model::{
    graph::{MstRow, ParentLink, TripGraph},
    place::PlaceId,
};

/// rebuilds an undirected trip graph from the rows of a flattened spanning
/// tree walk.
///
/// rows are replayed in sequence order as a preorder walk. a stack of
/// (depth, node) pairs tracks the path from the current root:
///   - a root row (edge -1) resets the stack to just that node
///   - a row with an explicit predecessor attaches to it directly
///   - otherwise the stack is popped until its top is shallower than the row,
///     and the top is the parent only if it sits exactly one level up
///
/// rows whose parent cannot be recovered become isolated nodes rather than
/// errors. every processed row is pushed onto the stack.
pub fn reconstruct_trip_graph(rows: &[MstRow]) -> TripGraph {
    let mut graph = TripGraph::new();
    let mut stack: Vec<(i64, i64)> = Vec::new();
    let mut n_orphans = 0;

    for row in rows.iter().sorted_by_key(|r| r.seq) {
        let node = PlaceId::attraction(row.node);

        if row.is_root() {
            stack.clear();
            stack.push((row.depth, row.node));
            graph.add_node(node);
            continue;
        }

        let parent = match row.parent {
            ParentLink::Explicit(pred) => Some(pred),
            ParentLink::Unusable => None,
            ParentLink::Infer => infer_parent(&mut stack, row.depth),
        };

        match parent {
            Some(pred) => {
                graph.add_undirected_edge(PlaceId::attraction(pred), node);
            }
            None => {
                n_orphans += 1;
                graph.add_node(node);
            }
        }
        stack.push((row.depth, row.node));
    }

    if n_orphans > 0 {
        log::debug!("{n_orphans} MST rows had no recoverable parent, kept as isolated nodes");
    }
    log::debug!(
        "reconstructed trip graph with {} nodes and {} edges from {} rows",
        graph.len(),
        graph.edge_count(),
        rows.len()
    );
    graph
}

/// pops the path stack back to the nearest shallower entry and returns it if
/// it is the direct parent of a node at `depth`.
fn infer_parent(stack: &mut Vec<(i64, i64)>, depth: i64) -> Option<i64> {
    while let Some((top_depth, _)) = stack.last() {
        if *top_depth >= depth {
            stack.pop();
        } else {
            break;
        }
    }
    match stack.last() {
        Some((top_depth, top_node)) if *top_depth == depth - 1 => Some(*top_node),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(graph: &TripGraph, n: i64) -> Vec<i64> {
        graph
            .neighbors(&PlaceId::attraction(n))
            .map(|s| s.iter().map(|id| id.number).collect())
            .unwrap_or_default()
    }

    fn inferred(seq: i64, depth: i64, node: i64) -> MstRow {
        MstRow::new(seq, depth, node, seq + 100, ParentLink::Infer)
    }

    #[test]
    fn test_two_row_example() {
        let rows = vec![
            MstRow::new(0, 0, 5, -1, ParentLink::Infer),
            MstRow::new(1, 1, 7, 2, ParentLink::Explicit(5)),
        ];
        let graph = reconstruct_trip_graph(&rows);
        assert_eq!(graph.len(), 2);
        assert_eq!(ids(&graph, 5), vec![7]);
        assert_eq!(ids(&graph, 7), vec![5]);
    }

    #[test]
    fn test_parents_inferred_from_depth() {
        //      1
        //    /   \
        //   2     4
        //   |
        //   3
        let rows = vec![
            MstRow::new(0, 0, 1, -1, ParentLink::Infer),
            inferred(1, 1, 2),
            inferred(2, 2, 3),
            inferred(3, 1, 4),
        ];
        let graph = reconstruct_trip_graph(&rows);
        assert_eq!(ids(&graph, 1), vec![2, 4]);
        assert_eq!(ids(&graph, 2), vec![1, 3]);
        assert_eq!(ids(&graph, 3), vec![2]);
        assert_eq!(ids(&graph, 4), vec![1]);
    }

    #[test]
    fn test_rows_sorted_by_sequence() {
        let rows = vec![
            inferred(2, 2, 3),
            inferred(1, 1, 2),
            MstRow::new(0, 0, 1, -1, ParentLink::Infer),
        ];
        let graph = reconstruct_trip_graph(&rows);
        assert_eq!(ids(&graph, 2), vec![1, 3]);
    }

    #[test]
    fn test_root_resets_stack() {
        // the second root starts a new tree, so node 9 at depth 1 must attach
        // to root 8 and never to anything from the first tree.
        let rows = vec![
            MstRow::new(0, 0, 1, -1, ParentLink::Infer),
            inferred(1, 1, 2),
            MstRow::new(2, 0, 8, -1, ParentLink::Infer),
            inferred(3, 1, 9),
        ];
        let graph = reconstruct_trip_graph(&rows);
        assert_eq!(ids(&graph, 9), vec![8]);
        assert_eq!(ids(&graph, 1), vec![2]);
        assert!(!graph.contains_edge(&PlaceId::attraction(2), &PlaceId::attraction(9)));
    }

    #[test]
    fn test_depth_gap_orphans_node() {
        let rows = vec![
            MstRow::new(0, 0, 1, -1, ParentLink::Infer),
            inferred(1, 3, 2),
            // node 3 at depth 4 hangs from the orphan, which stays on the stack
            inferred(2, 4, 3),
        ];
        let graph = reconstruct_trip_graph(&rows);
        assert!(graph.contains_node(&PlaceId::attraction(2)));
        assert!(ids(&graph, 1).is_empty());
        assert_eq!(ids(&graph, 2), vec![3]);
    }

    #[test]
    fn test_unusable_pred_orphans_node() {
        let rows = vec![
            MstRow::new(0, 0, 1, -1, ParentLink::Infer),
            MstRow::new(1, 1, 2, 5, ParentLink::Unusable),
        ];
        let graph = reconstruct_trip_graph(&rows);
        assert_eq!(graph.degree(&PlaceId::attraction(2)), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_no_self_loops_or_duplicates() {
        let rows = vec![
            MstRow::new(0, 0, 1, -1, ParentLink::Infer),
            MstRow::new(1, 1, 2, 5, ParentLink::Explicit(1)),
            MstRow::new(2, 1, 2, 6, ParentLink::Explicit(1)),
            MstRow::new(3, 1, 1, 7, ParentLink::Explicit(1)),
            MstRow::new(4, 2, 3, 8, ParentLink::Explicit(2)),
            MstRow::new(5, 1, 2, 9, ParentLink::Explicit(3)),
        ];
        let graph = reconstruct_trip_graph(&rows);
        for node in graph.nodes() {
            let neighbors = graph.neighbors(node).unwrap();
            assert!(!neighbors.contains(node), "self-loop at {node}");
        }
        assert_eq!(ids(&graph, 1), vec![2]);
        assert_eq!(ids(&graph, 2), vec![1, 3]);
        assert_eq!(ids(&graph, 3), vec![2]);
    }

    #[test]
    fn test_null_edge_row_is_dropped_from_raw_rows() {
        let raw = vec![
            serde_json::json!({"seq": 0, "depth": 0, "node": 1, "edge": -1}),
            serde_json::json!({"seq": 1, "depth": 1, "node": 2, "edge": null}),
            serde_json::json!({"seq": 2, "depth": 1, "node": 3, "edge": 5}),
        ];
        let graph = reconstruct_trip_graph(&MstRow::from_values(&raw));
        assert!(!graph.contains_node(&PlaceId::attraction(2)));
        assert!(graph.contains_edge(&PlaceId::attraction(1), &PlaceId::attraction(3)));
    }

    #[test]
    fn test_empty_rows() {
        assert!(reconstruct_trip_graph(&[]).is_empty());
    }
}
