// crates/travelmap-core/src/error.rs
use thiserror::Error;

/// Errors raised while reading, validating or writing an itinerary store file.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid itinerary data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TravelError>;
