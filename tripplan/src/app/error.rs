use std::path::PathBuf;

use tripplan_core::model::place::PlaceIdError;

use crate::client::BackendClientError;

#[derive(thiserror::Error, Debug)]
pub enum TripPlanAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    Client(#[from] BackendClientError),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Serializing trip plan failed: {0}")]
    SerializationError(String),
    #[error("Backend data holds an invalid place id: {0}")]
    PlaceId(#[from] PlaceIdError),
}
