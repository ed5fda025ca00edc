//! Shared types, config, and error definitions for the weather processor.

pub mod config;
pub mod error;
pub mod types;

pub use config::ProcessorConfig;
pub use error::{ConfigError, FetchError, ProcessorError, StoreError};
pub use types::*;
