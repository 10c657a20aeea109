use std::path::Path;

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tripplan_core::algorithm::{connectivity::ConnectivityConfig, zones::ZoneConfig};

use crate::{app::TripPlanAppError, client::BackendConfig};

/// file-based settings for a planning run. every section is optional.
///
/// ```toml
/// [backend]
/// base_url = "http://localhost:8080"
/// mst_timeout = 60
///
/// [connectivity]
/// max_new_edges = 500
///
/// [zones]
/// take_near = 6
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlanConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub zones: ZoneConfig,
}

impl PlanConfig {
    pub fn from_file(configuration_file: &Path) -> Result<PlanConfig, TripPlanAppError> {
        let filename = configuration_file.to_str().unwrap_or_default();
        let config = Config::builder()
            .add_source(File::from(configuration_file))
            .build()
            .map_err(|e| {
                let msg = format!("file '{filename}' produced error: {e}");
                TripPlanAppError::InvalidUserInput(msg)
            })?;
        PlanConfig::from_config(config, filename)
    }

    pub fn from_toml_str(contents: &str) -> Result<PlanConfig, TripPlanAppError> {
        let config = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()
            .map_err(|e| {
                let msg = format!("invalid TOML configuration: {e}");
                TripPlanAppError::InvalidUserInput(msg)
            })?;
        PlanConfig::from_config(config, "<inline>")
    }

    fn from_config(config: Config, source: &str) -> Result<PlanConfig, TripPlanAppError> {
        config.try_deserialize::<PlanConfig>().map_err(|e| {
            let msg = format!("error reading configuration from '{source}': {e}");
            TripPlanAppError::InvalidUserInput(msg)
        })
    }
}
