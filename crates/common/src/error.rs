//! Error taxonomy for the fetch → store pipeline.

use thiserror::Error;

/// Errors from the forecast fetch stage.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The weather API answered with a non-success status.
    #[error("weather API returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body was not valid JSON or was missing required fields.
    #[error("failed to parse weather response: {0}")]
    Parse(String),

    /// Transport-level failure talking to the weather API.
    #[error("HTTP request failed: {0}")]
    Http(String),
}

/// Errors from the persistence stage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The PutItem call failed (validation, throttling, connectivity).
    #[error("failed to put forecast record: {source}")]
    Put {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The record could not be serialized into a JSON document.
    #[error("failed to serialize forecast record: {0}")]
    Serialize(String),

    /// An attribute type with no JSON counterpart (binary, sets).
    #[error("unsupported attribute type: {0}")]
    UnsupportedAttribute(&'static str),

    /// A number attribute whose payload is not a valid JSON number.
    #[error("invalid number attribute: {0}")]
    InvalidNumber(String),
}

/// Errors reading the process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is required (set it in the function environment)")]
    MissingVar { name: &'static str },
}

/// Any failure in the fetch → store pipeline, caught by the handler.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
