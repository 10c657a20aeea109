use std::collections::HashSet;

use ordered_float::OrderedFloat;

use crate::model::{
    itinerary::{DayPlan, Itinerary},
    place::PlaceId,
};

use super::AssemblerContext;

/// result of offering a node to the current day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitOutcome {
    /// an attraction the day cannot afford. it is not added, but traversal
    /// still continues through it.
    Gated,
    /// the node was appended to the current day.
    Admitted,
    /// the node filled the current day, which was sealed.
    DaySealed,
    /// the node filled the last requested day. traversal must stop.
    TripComplete,
}

/// mutable state of one itinerary assembly.
///
/// per-day counters reset whenever a day is sealed. the visited set and the
/// meal pool span the whole trip: each node is offered at most once and each
/// meal place is served at most once.
#[derive(Clone, Debug)]
pub struct AssemblerState {
    days_requested: usize,
    sealed: Vec<DayPlan>,
    current: DayPlan,
    attraction_count: usize,
    attractions_spent: u64,
    visited: HashSet<PlaceId>,
    meal_pool: Vec<PlaceId>,
}

impl AssemblerState {
    pub fn new(days_requested: usize, meal_pool: Vec<PlaceId>) -> AssemblerState {
        AssemblerState {
            days_requested: days_requested.max(1),
            sealed: Vec::with_capacity(days_requested.max(1)),
            current: DayPlan::default(),
            attraction_count: 0,
            attractions_spent: 0,
            visited: HashSet::new(),
            meal_pool,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.sealed.len() >= self.days_requested
    }

    pub fn is_visited(&self, id: &PlaceId) -> bool {
        self.visited.contains(id)
    }

    pub fn days_sealed(&self) -> usize {
        self.sealed.len()
    }

    pub fn current_day(&self) -> &DayPlan {
        &self.current
    }

    pub fn attractions_spent(&self) -> u64 {
        self.attractions_spent
    }

    pub fn meal_pool(&self) -> &[PlaceId] {
        &self.meal_pool
    }

    /// whether the current day can afford this node. only attractions with a
    /// positive fee are ever refused.
    pub fn can_admit(&self, node: &PlaceId, ctx: &AssemblerContext) -> bool {
        if !node.is_attraction() {
            return true;
        }
        let fee = ctx.catalog.price_min(node);
        fee == 0 || self.attractions_spent + fee <= ctx.budget.attractions
    }

    /// marks a node visited and offers it to the current day.
    ///
    /// an admitted attraction that brings the day to exactly 2 or 4
    /// attractions is followed by a meal, as long as the day has room for
    /// it. a day that reaches capacity is sealed.
    pub fn visit(&mut self, node: PlaceId, ctx: &AssemblerContext) -> VisitOutcome {
        if self.is_complete() {
            return VisitOutcome::TripComplete;
        }
        self.visited.insert(node);

        if !self.can_admit(&node, ctx) {
            log::debug!(
                "attraction {node} exceeds the remaining attraction budget ({} of {} spent)",
                self.attractions_spent,
                ctx.budget.attractions
            );
            return VisitOutcome::Gated;
        }

        self.current.push(node);
        if node.is_meal() {
            self.meal_pool.retain(|m| m != &node);
        }
        if node.is_attraction() {
            self.attraction_count += 1;
            self.attractions_spent += ctx.catalog.price_min(&node);
            let meal_due = self.attraction_count == 2 || self.attraction_count == 4;
            if meal_due && !self.current.is_full() {
                if let Some(meal) = self.take_meal(&node, ctx) {
                    self.current.push(meal);
                }
            }
        }

        if self.current.is_full() {
            self.seal_day();
            if self.is_complete() {
                VisitOutcome::TripComplete
            } else {
                VisitOutcome::DaySealed
            }
        } else {
            VisitOutcome::Admitted
        }
    }

    /// removes and returns the meal to serve after visiting `near`: the
    /// nearest affordable meal, or the nearest meal of any price when none is
    /// affordable. meals without a measured distance count as infinitely far
    /// and ties go to the earliest meal in the pool.
    pub fn take_meal(&mut self, near: &PlaceId, ctx: &AssemblerContext) -> Option<PlaceId> {
        let affordable = self
            .meal_pool
            .iter()
            .enumerate()
            .filter(|(_, id)| ctx.catalog.price_min(id) <= ctx.budget.meal_each)
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();
        let candidates = if affordable.is_empty() {
            (0..self.meal_pool.len()).collect::<Vec<_>>()
        } else {
            affordable
        };
        let chosen = candidates.into_iter().min_by_key(|idx| {
            let meal = &self.meal_pool[*idx];
            OrderedFloat(ctx.distances.distance_or(near, meal, f64::INFINITY))
        })?;
        Some(self.meal_pool.remove(chosen))
    }

    /// seals the current day if it has any stops and resets the per-day
    /// counters.
    pub fn seal_day(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let day = std::mem::take(&mut self.current);
        log::debug!(
            "sealed day {} with {} stops",
            self.sealed.len() + 1,
            day.len()
        );
        self.sealed.push(day);
        self.attraction_count = 0;
        self.attractions_spent = 0;
    }

    /// seals any partial day and pads with empty days up to the requested
    /// count.
    pub fn finish(mut self) -> Itinerary {
        if !self.is_complete() {
            self.seal_day();
        }
        let n_empty = self.days_requested.saturating_sub(self.sealed.len());
        if n_empty > 0 {
            log::info!(
                "{n_empty} of {} days could not be filled",
                self.days_requested
            );
        }
        self.sealed
            .extend(std::iter::repeat_with(DayPlan::default).take(n_empty));
        Itinerary { days: self.sealed }
    }
}
