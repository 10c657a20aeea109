mod backend_client;
mod backend_config;
mod by_flow;
mod error;

pub use backend_client::BackendClient;
pub use backend_config::BackendConfig;
pub use by_flow::{ByFlowParams, ByFlowResponse, CutMode, TypePreference};
pub use error::BackendClientError;
