use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{
    budget::DayBudget,
    place::{Place, PlaceId},
};

use super::TripSpend;

/// display form of a place in the result payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlaceSummary {
    pub id: PlaceId,
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl From<&Place> for PlaceSummary {
    fn from(place: &Place) -> Self {
        PlaceSummary {
            id: place.id,
            name: place.name.clone(),
            lat: place.lat,
            lon: place.lon,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayDetail {
    pub day: usize,
    pub plan: Vec<PlaceSummary>,
    pub budget: DayBudget,
}

/// one hop of the stitched route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteSegment {
    pub from: PlaceId,
    pub from_name: String,
    pub from_lat: Option<f64>,
    pub from_lon: Option<f64>,
    pub to: PlaceId,
    pub to_name: String,
    pub to_lat: Option<f64>,
    pub to_lon: Option<f64>,
    pub distance_km: f64,
    pub day: usize,
}

/// the complete result handed to the presentation layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TripPlan {
    pub start: PlaceId,
    pub start_name: String,
    pub trip_plan_by_day: Vec<DayDetail>,
    pub paths: Vec<RouteSegment>,
    pub total_distance_km: f64,
    pub accommodation: Option<PlaceSummary>,
    pub message: String,
    /// min-cut edges reported by the backend, passed through untouched.
    pub applied_cut_edges: Value,
    /// raw MST rows as received, passed through untouched.
    pub mst_raw_rows: Vec<Value>,
    pub total_budget: u64,
    pub budget_per_day: u64,
    pub spend: TripSpend,
}
