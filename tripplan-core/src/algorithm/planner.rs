use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{
    budget::DayBudget,
    graph::{DistanceGraph, MstRow},
    itinerary::{DayDetail, Itinerary, PlaceSummary, TripPlan},
    place::{PlaceCatalog, PlaceId},
};

use super::{
    assembler::{assemble_itinerary, AssemblerContext},
    connectivity::{self, ConnectivityConfig},
    lodging, route, spend,
    tree_reconstruction::reconstruct_trip_graph,
};

pub const PLAN_CREATED_MESSAGE: &str = "trip plan created";

/// what the traveler asked for.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanRequest {
    pub start: PlaceId,
    pub days: usize,
    pub total_budget: u64,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
}

/// everything fetched from the backend for one plan.
#[derive(Clone, Debug, Default)]
pub struct PlanInputs {
    pub catalog: PlaceCatalog,
    pub distances: DistanceGraph,
    /// MST rows exactly as the backend sent them.
    pub mst_rows: Vec<Value>,
    pub applied_cut_edges: Value,
}

/// turns backend inputs into a complete trip plan.
///
/// the spanning tree is rebuilt and repaired, walked into day plans under the
/// daily budget, and then dressed with a lodging, a route and the actual
/// spend. degenerate inputs give a partial or empty plan, never an error.
pub fn plan_trip(request: &PlanRequest, inputs: &PlanInputs) -> TripPlan {
    let days = request.days.max(1);
    let start = request.start;
    let catalog = &inputs.catalog;

    let rows = MstRow::from_values(&inputs.mst_rows);
    let mut graph = reconstruct_trip_graph(&rows);
    connectivity::augment(&start, &mut graph, &inputs.distances, &request.connectivity);

    let budget = DayBudget::split(request.total_budget, days as u64);
    log::info!(
        "planning {days} days from {start} at {} per day ({} lodging, {} per meal, {} sights)",
        budget.per_day,
        budget.hotel,
        budget.meal_each,
        budget.attractions
    );
    let ctx = AssemblerContext::new(&graph, &inputs.distances, catalog, budget);
    let itinerary = assemble_itinerary(&start, days, &ctx);
    log::info!(
        "assembled {} days with {} stops",
        itinerary.n_days(),
        itinerary.stops().count()
    );

    let centroid = lodging::itinerary_centroid(&itinerary, catalog);
    let accommodation = lodging::select_lodging(catalog.lodgings(), centroid, budget.hotel);
    match accommodation {
        Some(l) => log::info!(
            "selected lodging {} ({}) at {} per night",
            l.id,
            l.name,
            l.price_min
        ),
        None => log::info!("no lodging selected, the plan has no route"),
    }

    let stitched = accommodation
        .map(|l| route::stitch_route(&itinerary, &l.id, &inputs.distances, catalog))
        .unwrap_or_default();
    let hotel_per_day = accommodation.map(|l| l.price_min).unwrap_or_default();
    let spend = spend::reconcile_spend(&itinerary, catalog, hotel_per_day);

    let start_name = catalog
        .get(&start)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| start.to_string());

    TripPlan {
        start,
        start_name,
        trip_plan_by_day: day_details(&itinerary, catalog, budget),
        paths: stitched.segments,
        total_distance_km: stitched.total_distance_km,
        accommodation: accommodation.map(PlaceSummary::from),
        message: PLAN_CREATED_MESSAGE.to_string(),
        applied_cut_edges: inputs.applied_cut_edges.clone(),
        mst_raw_rows: inputs.mst_rows.clone(),
        total_budget: request.total_budget,
        budget_per_day: budget.per_day,
        spend,
    }
}

/// per-day display rows. stops missing from the catalog are left out.
fn day_details(itinerary: &Itinerary, catalog: &PlaceCatalog, budget: DayBudget) -> Vec<DayDetail> {
    itinerary
        .days
        .iter()
        .enumerate()
        .map(|(idx, plan)| DayDetail {
            day: idx + 1,
            plan: plan
                .stops()
                .iter()
                .filter_map(|id| catalog.get(id))
                .map(PlaceSummary::from)
                .collect_vec(),
            budget,
        })
        .collect_vec()
}
