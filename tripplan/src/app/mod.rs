mod backend_snapshot;
mod error;
mod plan;
mod plan_config;
mod tripplan_app;

pub use backend_snapshot::{BackendSnapshot, RAW_SNAPSHOT_FILENAME};
pub use error::TripPlanAppError;
pub use plan::run;
pub use plan_config::PlanConfig;
pub use tripplan_app::{TripPlanApp, TripPlanOperation};
