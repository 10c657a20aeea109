use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tripplan_core::algorithm::zones::ZoneSelection;

/// how the backend treats edges crossing the min cut when building the MST.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CutMode {
    /// cut edges stay usable at a multiplied cost.
    #[serde(rename = "penalize")]
    Penalize,
    /// cut edges are removed.
    #[serde(rename = "exclude")]
    Exclude,
}

impl std::fmt::Display for CutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CutMode::Penalize => "penalize",
            CutMode::Exclude => "exclude",
        };
        write!(f, "{s}")
    }
}

/// a place type the MST should favor, with its edge weight multiplier.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TypePreference {
    pub types: String,
    pub weight: f64,
}

/// query of the min-cut MST endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ByFlowParams {
    /// attraction number the tree is rooted at.
    pub root: i64,
    /// search radius around the root, in meters.
    pub distance: u64,
    /// nearest neighbors per node for the flow network.
    pub k: usize,
    /// nearest neighbors per node for the MST.
    pub k_mst: usize,
    pub mode: CutMode,
    /// cost multiplier applied to cut edges in penalize mode.
    pub penalty: f64,
    /// attractions around the root used when the backend picks zones itself.
    pub n_top: usize,
    #[serde(default)]
    pub zones: ZoneSelection,
    /// up to three preferences, in the prefer/w1, prefer2/w2 and prefer3/w3
    /// slots. a preference with no types leaves its slot unset.
    #[serde(default)]
    pub preferences: Vec<TypePreference>,
}

impl ByFlowParams {
    pub fn with_zones(self, zones: ZoneSelection) -> ByFlowParams {
        ByFlowParams { zones, ..self }
    }

    /// query string pairs. empty zones and preferences are omitted so the
    /// backend falls back to its own defaults.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (String::from("root"), self.root.to_string()),
            (String::from("distance"), self.distance.to_string()),
            (String::from("k"), self.k.to_string()),
            (String::from("k_mst"), self.k_mst.to_string()),
            (String::from("mode"), self.mode.to_string()),
            (String::from("penalty"), self.penalty.to_string()),
            (String::from("n_top"), self.n_top.to_string()),
        ];
        if let Some(zone_a) = self.zones.zone_a_csv() {
            pairs.push((String::from("zoneA"), zone_a));
        }
        if let Some(zone_b) = self.zones.zone_b_csv() {
            pairs.push((String::from("zoneB"), zone_b));
        }
        let names = [("prefer", "w1"), ("prefer2", "w2"), ("prefer3", "w3")];
        for ((prefer_key, weight_key), preference) in names.iter().zip(self.preferences.iter()) {
            if preference.types.is_empty() {
                continue;
            }
            pairs.push((prefer_key.to_string(), preference.types.clone()));
            pairs.push((weight_key.to_string(), preference.weight.to_string()));
        }
        pairs
    }
}

/// body of the min-cut MST endpoint. rows are kept as raw JSON since their
/// field names vary between backend versions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ByFlowResponse {
    #[serde(default)]
    pub mst: Vec<Value>,
    #[serde(default = "empty_array")]
    pub applied_cut_edges: Value,
}

fn empty_array() -> Value {
    Value::Array(vec![])
}

impl ByFlowResponse {
    /// the response used when the backend could not be reached.
    pub fn empty() -> ByFlowResponse {
        ByFlowResponse {
            mst: vec![],
            applied_cut_edges: empty_array(),
        }
    }
}

impl Default for ByFlowResponse {
    fn default() -> Self {
        ByFlowResponse::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ByFlowParams {
        ByFlowParams {
            root: 163,
            distance: 4000,
            k: 20,
            k_mst: 20,
            mode: CutMode::Penalize,
            penalty: 1.3,
            n_top: 40,
            zones: ZoneSelection::default(),
            preferences: vec![],
        }
    }

    fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_required_pairs() {
        let pairs = params().query_pairs();
        assert_eq!(lookup(&pairs, "root"), Some("163"));
        assert_eq!(lookup(&pairs, "distance"), Some("4000"));
        assert_eq!(lookup(&pairs, "mode"), Some("penalize"));
        assert_eq!(lookup(&pairs, "penalty"), Some("1.3"));
        assert_eq!(lookup(&pairs, "n_top"), Some("40"));
        assert_eq!(lookup(&pairs, "zoneA"), None);
        assert_eq!(lookup(&pairs, "prefer"), None);
        assert_eq!(pairs.len(), 7);
    }

    #[test]
    fn test_zones_and_preferences() {
        let zones = ZoneSelection {
            zone_a: vec![163, 4, 9],
            zone_b: vec![],
        };
        let mut params = params().with_zones(zones);
        params.preferences = vec![
            TypePreference {
                types: String::from("temple,culture"),
                weight: 0.75,
            },
            TypePreference {
                types: String::new(),
                weight: 0.85,
            },
            TypePreference {
                types: String::from("nature"),
                weight: 0.95,
            },
        ];
        let pairs = params.query_pairs();
        assert_eq!(lookup(&pairs, "zoneA"), Some("163,4,9"));
        assert_eq!(lookup(&pairs, "zoneB"), None);
        assert_eq!(lookup(&pairs, "prefer"), Some("temple,culture"));
        assert_eq!(lookup(&pairs, "w1"), Some("0.75"));
        assert_eq!(lookup(&pairs, "prefer2"), None);
        assert_eq!(lookup(&pairs, "w2"), None);
        assert_eq!(lookup(&pairs, "prefer3"), Some("nature"));
        assert_eq!(lookup(&pairs, "w3"), Some("0.95"));
    }

    #[test]
    fn test_response_defaults() {
        let response: ByFlowResponse = serde_json::from_str(r#"{"mst": [{"node": 1}]}"#).unwrap();
        assert_eq!(response.mst.len(), 1);
        assert_eq!(response.applied_cut_edges, serde_json::json!([]));
        let response: ByFlowResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, ByFlowResponse::empty());
    }
}
