//! Error types for Ranger Core

use crate::limits::ValidationError;
use thiserror::Error;

/// Result type alias using Ranger's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Ranger error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Park not found: {0}")]
    ParkNotFound(String),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Unknown {kind} reference: {key}")]
    UnknownReference { kind: &'static str, key: String },

    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
