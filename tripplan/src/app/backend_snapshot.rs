use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tripplan_core::{
    algorithm::{
        planner::PlanInputs,
        zones::{self, ZoneConfig},
    },
    model::{
        graph::{DistanceGraph, DistanceRecords},
        place::{Place, PlaceCatalog, PlaceCategory, PlaceId, PlaceRecord},
    },
};

use crate::{
    app::TripPlanAppError,
    client::{BackendClient, ByFlowParams, ByFlowResponse},
};

/// filename used when storing a snapshot next to the plan output.
pub const RAW_SNAPSHOT_FILENAME: &str = "tripplan-raw.json";

/// every backend response needed for one plan, as received.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BackendSnapshot {
    #[serde(default)]
    pub landmarks: Vec<PlaceRecord>,
    #[serde(default)]
    pub restaurants: Vec<PlaceRecord>,
    #[serde(default)]
    pub accommodations: Vec<PlaceRecord>,
    #[serde(default)]
    pub distances: DistanceRecords,
    #[serde(default)]
    pub by_flow: ByFlowResponse,
}

impl BackendSnapshot {
    /// queries the backend for catalogs, distances and the MST.
    ///
    /// a failed call is logged and replaced by an empty response, so a flaky
    /// backend still yields a (possibly empty) plan. when `zone_config` is
    /// given, zone hints are computed from the fetched landmarks and sent
    /// with the MST query.
    pub fn collect(
        client: &BackendClient,
        start: &PlaceId,
        by_flow: ByFlowParams,
        zone_config: Option<&ZoneConfig>,
    ) -> BackendSnapshot {
        log::info!("collecting backend data from {}", client.config().base_url);
        let landmarks = fetch_or_empty(client, PlaceCategory::Attraction);
        let restaurants = fetch_or_empty(client, PlaceCategory::Meal);
        let accommodations = fetch_or_empty(client, PlaceCategory::Lodging);
        log::info!(
            "loaded {} landmarks, {} restaurants and {} accommodations",
            landmarks.len(),
            restaurants.len(),
            accommodations.len()
        );

        let ids = std::iter::once(*start)
            .chain(landmarks.iter().map(|r| PlaceId::attraction(r.id)))
            .chain(restaurants.iter().map(|r| PlaceId::meal(r.id)))
            .chain(accommodations.iter().map(|r| PlaceId::lodging(r.id)))
            .collect_vec();
        let distances = client.fetch_distances(&ids).unwrap_or_else(|e| {
            log::warn!("continuing without distances: {e}");
            DistanceRecords::default()
        });

        let by_flow = match zone_config {
            Some(config) => {
                let attractions = landmarks
                    .iter()
                    .map(|r| Place::from_record(PlaceCategory::Attraction, r))
                    .collect_vec();
                let zones = zones::pick_zones(start, &attractions, config);
                log::debug!("zone hints A={:?} B={:?}", zones.zone_a, zones.zone_b);
                by_flow.with_zones(zones)
            }
            None => by_flow,
        };
        let by_flow = client.fetch_by_flow(&by_flow).unwrap_or_else(|e| {
            log::warn!("continuing without an MST: {e}");
            ByFlowResponse::empty()
        });

        BackendSnapshot {
            landmarks,
            restaurants,
            accommodations,
            distances,
            by_flow,
        }
    }

    /// reads a snapshot stored by a previous run.
    pub fn read_local(path: &Path) -> Result<BackendSnapshot, TripPlanAppError> {
        let contents = std::fs::read(path).map_err(|e| TripPlanAppError::ReadError {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        serde_json::from_slice::<BackendSnapshot>(&contents).map_err(|e| {
            TripPlanAppError::ReadError {
                path: path.to_owned(),
                message: format!("failed to deserialize from JSON: {e}"),
            }
        })
    }

    pub fn write_json(&self, path: &Path) -> Result<(), TripPlanAppError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            let msg = format!("failure while serializing backend snapshot as JSON: {e}");
            TripPlanAppError::SerializationError(msg)
        })?;
        std::fs::write(path, json).map_err(|e| TripPlanAppError::WriteError {
            path: path.to_owned(),
            message: e.to_string(),
        })
    }

    /// builds the planner inputs. fails only on a malformed place id in the
    /// distance records.
    pub fn into_plan_inputs(self) -> Result<PlanInputs, TripPlanAppError> {
        let catalog =
            PlaceCatalog::from_records(&self.landmarks, &self.restaurants, &self.accommodations);
        let distances = DistanceGraph::try_from(&self.distances)?;
        Ok(PlanInputs {
            catalog,
            distances,
            mst_rows: self.by_flow.mst,
            applied_cut_edges: self.by_flow.applied_cut_edges,
        })
    }
}

fn fetch_or_empty(client: &BackendClient, category: PlaceCategory) -> Vec<PlaceRecord> {
    client.fetch_places(category).unwrap_or_else(|e| {
        log::warn!("continuing without {category} records: {e}");
        vec![]
    })
}
