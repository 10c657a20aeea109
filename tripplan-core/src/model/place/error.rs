#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceIdError {
    #[error("place id is empty")]
    Empty,
    #[error("place id '{id}' has unknown category prefix '{prefix}', expected one of P, R, A")]
    UnknownPrefix { id: String, prefix: char },
    #[error("place id '{id}' does not end in an integer: {message}")]
    InvalidNumber { id: String, message: String },
}
