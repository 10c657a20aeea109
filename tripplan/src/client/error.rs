#[derive(thiserror::Error, Debug)]
pub enum BackendClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),
    #[error("Request to '{url}' failed: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("Request to '{url}' returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to decode JSON response from '{url}': {source}")]
    Decode { url: String, source: reqwest::Error },
}
