use std::path::{Path, PathBuf};

use tripplan_core::{
    algorithm::planner::{plan_trip, PlanRequest},
    model::itinerary::TripPlan,
};

use crate::{
    app::{
        backend_snapshot::{BackendSnapshot, RAW_SNAPSHOT_FILENAME},
        PlanConfig, TripPlanAppError,
    },
    client::{BackendClient, ByFlowParams},
};

/// runs one planning session: gather backend data, optionally store it, plan
/// the trip and write the result as JSON.
pub fn run(
    request: &PlanRequest,
    by_flow: ByFlowParams,
    use_zones: bool,
    config: &PlanConfig,
    local_source: Option<&Path>,
    store_raw: bool,
    output_file: Option<&Path>,
) -> Result<(), TripPlanAppError> {
    let snapshot = match local_source {
        Some(src_path) => {
            log::info!("planning from stored snapshot {}", src_path.display());
            BackendSnapshot::read_local(src_path)?
        }
        None => {
            let client = BackendClient::new(config.backend.clone())?;
            let zone_config = use_zones.then_some(&config.zones);
            BackendSnapshot::collect(&client, &request.start, by_flow, zone_config)
        }
    };

    if store_raw {
        let raw_path = raw_snapshot_path(output_file);
        snapshot.write_json(&raw_path)?;
        log::info!("stored backend snapshot at {}", raw_path.display());
    }

    let inputs = snapshot.into_plan_inputs()?;
    let plan = plan_trip(request, &inputs);
    write_plan(&plan, output_file)
}

/// the snapshot goes next to the output file, or into the working directory
/// when the plan is printed.
fn raw_snapshot_path(output_file: Option<&Path>) -> PathBuf {
    output_file
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""))
        .join(RAW_SNAPSHOT_FILENAME)
}

fn write_plan(plan: &TripPlan, output_file: Option<&Path>) -> Result<(), TripPlanAppError> {
    let json = serde_json::to_string_pretty(plan).map_err(|e| {
        let msg = format!("failure while serializing trip plan as JSON: {e}");
        TripPlanAppError::SerializationError(msg)
    })?;
    match output_file {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| TripPlanAppError::WriteError {
                path: path.to_owned(),
                message: e.to_string(),
            })?;
            log::info!("wrote trip plan to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
