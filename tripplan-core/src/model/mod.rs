pub mod budget;
pub mod graph;
pub mod itinerary;
pub mod place;
