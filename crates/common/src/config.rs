//! Processor configuration, read once at startup.

use crate::error::ConfigError;

/// Environment variable naming the destination DynamoDB table.
pub const TARGET_TABLE_VAR: &str = "TARGET_TABLE";

#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Table receiving forecast records.
    pub target_table: String,
}

impl ProcessorConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let target_table = std::env::var(TARGET_TABLE_VAR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar {
                name: TARGET_TABLE_VAR,
            })?;

        Ok(Self { target_table })
    }
}
