use std::time::Duration;

use serde::{Deserialize, Serialize};

/// where the graph backend lives and how long each kind of call may take.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// timeout for the place catalog endpoints, in seconds.
    #[serde(default = "default_catalog_timeout")]
    pub catalog_timeout: u64,
    /// timeout for the pairwise distance endpoint, in seconds.
    #[serde(default = "default_distances_timeout")]
    pub distances_timeout: u64,
    /// timeout for the min-cut MST endpoint, in seconds.
    #[serde(default = "default_mst_timeout")]
    pub mst_timeout: u64,
}

fn default_base_url() -> String {
    String::from("http://localhost:8080")
}

fn default_catalog_timeout() -> u64 {
    20
}

fn default_distances_timeout() -> u64 {
    30
}

fn default_mst_timeout() -> u64 {
    40
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog_timeout: default_catalog_timeout(),
            distances_timeout: default_distances_timeout(),
            mst_timeout: default_mst_timeout(),
        }
    }
}

impl BackendConfig {
    /// full URL of a backend endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout)
    }

    pub fn distances_timeout(&self) -> Duration {
        Duration::from_secs(self.distances_timeout)
    }

    pub fn mst_timeout(&self) -> Duration {
        Duration::from_secs(self.mst_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let config = BackendConfig {
            base_url: String::from("http://example.org:9000/api/"),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint("/landmarks"),
            "http://example.org:9000/api/landmarks"
        );
        assert_eq!(
            config.endpoint("mst/byflow"),
            "http://example.org:9000/api/mst/byflow"
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let raw = r#"{"base_url": "http://10.0.0.2:8080", "mst_timeout": 90}"#;
        let config: BackendConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.catalog_timeout(), Duration::from_secs(20));
        assert_eq!(config.distances_timeout(), Duration::from_secs(30));
        assert_eq!(config.mst_timeout(), Duration::from_secs(90));
    }
}
