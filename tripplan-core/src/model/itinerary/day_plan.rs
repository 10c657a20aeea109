use serde::{Deserialize, Serialize};

use crate::model::place::PlaceId;

/// maximum number of stops in a single day.
pub const DAY_CAPACITY: usize = 6;

/// the ordered stops of one day. sealed by the assembler once full or once
/// traversal ends.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DayPlan(Vec<PlaceId>);

impl DayPlan {
    pub fn new(stops: Vec<PlaceId>) -> DayPlan {
        DayPlan(stops)
    }

    pub fn stops(&self) -> &[PlaceId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= DAY_CAPACITY
    }

    pub(crate) fn push(&mut self, id: PlaceId) {
        self.0.push(id);
    }

    pub fn meal_count(&self) -> usize {
        self.0.iter().filter(|id| id.is_meal()).count()
    }
}

/// day plans for the whole trip, one entry per requested day.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Itinerary {
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// all stops across all days, in visiting order.
    pub fn stops(&self) -> impl Iterator<Item = &PlaceId> {
        self.days.iter().flat_map(|d| d.stops().iter())
    }

    pub fn n_days(&self) -> usize {
        self.days.len()
    }
}
