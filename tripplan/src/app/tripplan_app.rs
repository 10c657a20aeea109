use std::{path::Path, str::FromStr};

use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tripplan_core::{algorithm::planner::PlanRequest, model::place::PlaceId};

use crate::{
    app::{PlanConfig, TripPlanAppError},
    client::{ByFlowParams, CutMode, TypePreference},
};

/// Command line tool that turns min-cut MST routing output into a budgeted,
/// day-by-day travel itinerary
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripPlanApp {
    #[command(subcommand)]
    pub op: TripPlanOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TripPlanOperation {
    /// plan a trip from a starting place and write it as JSON
    Plan {
        /// id of the place the trip starts from, such as P163.
        #[arg(short, long)]
        start: String,

        /// number of days to plan.
        #[arg(long, default_value_t = 1)]
        days: usize,

        /// total trip budget, split evenly across days.
        #[arg(short, long, default_value_t = 0)]
        budget: u64,

        /// search radius around the start for the MST, in meters.
        #[arg(long, default_value_t = 4000)]
        distance: u64,

        /// nearest neighbors per node in the flow network.
        #[arg(long, default_value_t = 20)]
        k: usize,

        /// nearest neighbors per node in the MST.
        #[arg(long, default_value_t = 20)]
        k_mst: usize,

        /// how edges crossing the min cut are treated.
        #[arg(long, value_enum, default_value_t = CutMode::Penalize)]
        mode: CutMode,

        /// cost multiplier for cut edges in penalize mode.
        #[arg(long, default_value_t = 1.3)]
        penalty: f64,

        /// compute min-cut zone hints from coordinates. when false the
        /// backend picks zones from the n_top attractions around the start.
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        use_boykov: bool,

        /// comma separated place types to favor, highest priority.
        #[arg(long)]
        prefer: Option<String>,

        /// edge weight multiplier for `prefer`.
        #[arg(long, default_value_t = 0.75)]
        w1: f64,

        /// comma separated place types to favor, second priority.
        #[arg(long)]
        prefer2: Option<String>,

        /// edge weight multiplier for `prefer2`.
        #[arg(long, default_value_t = 0.85)]
        w2: f64,

        /// comma separated place types to favor, third priority.
        #[arg(long)]
        prefer3: Option<String>,

        /// edge weight multiplier for `prefer3`.
        #[arg(long, default_value_t = 0.95)]
        w3: f64,

        /// attractions around the start the backend uses for its own zones.
        #[arg(long, default_value_t = 40)]
        n_top: usize,

        /// TOML file with [backend], [connectivity] and [zones] sections.
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// file to write the trip plan to. if not provided, the plan is
        /// printed to stdout.
        #[arg(short, long)]
        output_file: Option<String>,

        /// plan from a snapshot written by a previous run with --store-raw
        /// instead of querying the backend.
        #[arg(short, long)]
        local_source: Option<String>,

        /// write the backend responses as a JSON snapshot next to the output.
        #[arg(long)]
        store_raw: bool,
    },
}

impl TripPlanOperation {
    pub fn run(&self) -> Result<(), TripPlanAppError> {
        match self {
            TripPlanOperation::Plan {
                start,
                days,
                budget,
                distance,
                k,
                k_mst,
                mode,
                penalty,
                use_boykov,
                prefer,
                w1,
                prefer2,
                w2,
                prefer3,
                w3,
                n_top,
                configuration_file,
                output_file,
                local_source,
                store_raw,
            } => {
                let start_id = PlaceId::from_str(start).map_err(|e| {
                    let msg = format!("start '{start}' is not a valid place id: {e}");
                    TripPlanAppError::InvalidUserInput(msg)
                })?;
                if *days == 0 {
                    log::warn!("days must be at least 1, planning a single day");
                }
                let config = match configuration_file {
                    Some(f) => PlanConfig::from_file(Path::new(f))?,
                    None => PlanConfig::default(),
                };

                let preferences = [(prefer, w1), (prefer2, w2), (prefer3, w3)]
                    .into_iter()
                    .map(|(types, weight)| TypePreference {
                        types: types.clone().unwrap_or_default(),
                        weight: *weight,
                    })
                    .collect();
                let by_flow = ByFlowParams {
                    root: start_id.number,
                    distance: *distance,
                    k: *k,
                    k_mst: *k_mst,
                    mode: *mode,
                    penalty: *penalty,
                    n_top: *n_top,
                    zones: Default::default(),
                    preferences,
                };
                let request = PlanRequest {
                    start: start_id,
                    days: (*days).max(1),
                    total_budget: *budget,
                    connectivity: config.connectivity,
                };
                log::info!(
                    "running trip planner
        start {start_id}
        days {}
        budget {budget}
        mode {mode} penalty {penalty}
        zone hints {use_boykov}",
                    request.days
                );

                crate::app::plan::run(
                    &request,
                    by_flow,
                    *use_boykov,
                    &config,
                    local_source.as_ref().map(Path::new),
                    *store_raw,
                    output_file.as_ref().map(Path::new),
                )
            }
        }
    }
}
