mod day_plan;
mod spend;
mod trip_plan;

pub use day_plan::{DayPlan, Itinerary, DAY_CAPACITY};
pub use spend::{DaySpend, SpendBreakdown, TripSpend};
pub use trip_plan::{DayDetail, PlaceSummary, RouteSegment, TripPlan};
