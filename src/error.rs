use thiserror::Error;

use crate::domain::monitor::lifecycle::LifecycleState;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Invalid time table: {0}")]
    TimeTableError(String),

    #[error("Capacity-change request could not be delivered: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Capacity-change request was rejected: {0}")]
    RequestRejected(String),

    #[error("Invalid lifecycle transition from {from:?} to {to:?}")]
    LifecycleError { from: LifecycleState, to: LifecycleState },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Unknown seat state: {0}")]
    UnknownSeatState(String),
}

pub type Result<T> = std::result::Result<T, Error>;
