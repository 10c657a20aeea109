use std::time::Duration;

use itertools::Itertools;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tripplan_core::model::{
    graph::DistanceRecords,
    place::{PlaceCategory, PlaceId, PlaceRecord},
};

use super::{BackendClientError, BackendConfig, ByFlowParams, ByFlowResponse};

/// blocking HTTP client for the place, distance and MST endpoints of the
/// graph backend.
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<BackendClient, BackendClientError> {
        let http = Client::builder()
            .build()
            .map_err(|e| BackendClientError::Build(e.to_string()))?;
        Ok(BackendClient { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// catalog endpoint path for a place category.
    pub fn catalog_path(category: PlaceCategory) -> &'static str {
        match category {
            PlaceCategory::Attraction => "landmarks",
            PlaceCategory::Meal => "restaurants",
            PlaceCategory::Lodging => "accommodations",
        }
    }

    /// all places of one category.
    pub fn fetch_places(
        &self,
        category: PlaceCategory,
    ) -> Result<Vec<PlaceRecord>, BackendClientError> {
        let path = BackendClient::catalog_path(category);
        let records: Vec<PlaceRecord> = self.get_json(path, &[], self.config.catalog_timeout())?;
        log::debug!("fetched {} {category} records from /{path}", records.len());
        Ok(records)
    }

    /// pairwise distances between the given places, keyed by source id.
    pub fn fetch_distances(&self, ids: &[PlaceId]) -> Result<DistanceRecords, BackendClientError> {
        let ids_param = ids.iter().sorted().dedup().join(",");
        let query = [(String::from("ids"), ids_param)];
        let distances: DistanceRecords =
            self.get_json("distances", &query, self.config.distances_timeout())?;
        log::debug!("fetched distances for {} source places", distances.len());
        Ok(distances)
    }

    /// the min-cut constrained spanning tree rooted at `params.root`.
    pub fn fetch_by_flow(
        &self,
        params: &ByFlowParams,
    ) -> Result<ByFlowResponse, BackendClientError> {
        let query = params.query_pairs();
        let response: ByFlowResponse =
            self.get_json("mst/byflow", &query, self.config.mst_timeout())?;
        log::debug!("fetched {} MST rows", response.mst.len());
        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<T, BackendClientError> {
        let url = self.config.endpoint(path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .timeout(timeout)
            .send()
            .map_err(|source| BackendClientError::Request {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendClientError::Status { url, status });
        }
        response
            .json::<T>()
            .map_err(|source| BackendClientError::Decode { url, source })
    }
}
