use std::cmp::Reverse;

use itertools::Itertools;

use crate::model::{
    budget::DayBudget,
    graph::{DistanceGraph, TripGraph},
    itinerary::Itinerary,
    place::{PlaceCatalog, PlaceId},
};

use super::{AssemblerState, VisitOutcome};

/// read-only inputs shared by every step of an assembly.
#[derive(Clone, Copy, Debug)]
pub struct AssemblerContext<'a> {
    pub graph: &'a TripGraph,
    pub distances: &'a DistanceGraph,
    pub catalog: &'a PlaceCatalog,
    pub budget: DayBudget,
}

impl<'a> AssemblerContext<'a> {
    pub fn new(
        graph: &'a TripGraph,
        distances: &'a DistanceGraph,
        catalog: &'a PlaceCatalog,
        budget: DayBudget,
    ) -> AssemblerContext<'a> {
        AssemblerContext {
            graph,
            distances,
            catalog,
            budget,
        }
    }
}

/// pending work for one node of the depth-first walk: the node and the index
/// of its next unexplored neighbor.
#[derive(Clone, Copy, Debug)]
struct Frame {
    node: PlaceId,
    next: usize,
}

/// splits a walk of the trip graph into day plans.
///
/// the walk starts at `start` and visits neighbors in insertion order. once
/// that component is exhausted, unvisited attractions are tried as new roots,
/// highest degree first. the result always holds exactly `days` day plans.
pub fn assemble_itinerary(start: &PlaceId, days: usize, ctx: &AssemblerContext) -> Itinerary {
    let meal_pool = ctx.catalog.meals().iter().map(|m| m.id).collect_vec();
    let mut state = AssemblerState::new(days, meal_pool);

    walk_from(*start, &mut state, ctx);

    if !state.is_complete() {
        let roots = ctx
            .graph
            .nodes()
            .filter(|id| id.is_attraction() && !state.is_visited(id))
            .copied()
            .sorted_by_key(|id| Reverse(ctx.graph.degree(id)))
            .collect_vec();
        log::debug!(
            "walk from {start} exhausted after {} days, {} candidate roots remain",
            state.days_sealed(),
            roots.len()
        );
        for root in roots {
            if state.is_complete() {
                break;
            }
            if !state.is_visited(&root) {
                walk_from(root, &mut state, ctx);
            }
        }
    }

    state.finish()
}

/// depth-first walk from `root` over an explicit frame stack. stops as soon as
/// the last requested day is sealed.
fn walk_from(root: PlaceId, state: &mut AssemblerState, ctx: &AssemblerContext) {
    if state.visit(root, ctx) == VisitOutcome::TripComplete {
        return;
    }
    let mut stack = vec![Frame {
        node: root,
        next: 0,
    }];

    while let Some(top) = stack.len().checked_sub(1) {
        let Frame { node, next } = stack[top];
        match ctx.graph.neighbor_at(&node, next) {
            None => {
                stack.pop();
            }
            Some(neighbor) => {
                stack[top].next += 1;
                if state.is_visited(&neighbor) {
                    continue;
                }
                if state.visit(neighbor, ctx) == VisitOutcome::TripComplete {
                    return;
                }
                stack.push(Frame {
                    node: neighbor,
                    next: 0,
                });
            }
        }
    }
}
