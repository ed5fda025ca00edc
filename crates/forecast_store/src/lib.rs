//! DynamoDB persistence for forecast records.

pub mod attr;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use common::{ForecastRecord, StoreError};
use tracing::{debug, info};

/// Writer for the forecast table.
///
/// Wraps a long-lived SDK client so warm invocations reuse connections.
#[derive(Debug, Clone)]
pub struct ForecastStore {
    client: Client,
    table_name: String,
}

impl ForecastStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Upsert a record keyed by its id.
    ///
    /// A single unconditional PutItem: last write wins if an id were ever
    /// reused, and a failed call leaves nothing behind.
    pub async fn put(&self, record: &ForecastRecord) -> Result<(), StoreError> {
        let forecast = serde_json::to_value(&record.forecast)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        debug!(
            "Weather data to store: id={} table={}",
            record.id, self.table_name
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(record.id.clone()))
            .item("forecast", attr::to_attribute_value(&forecast))
            .send()
            .await
            .map_err(|e| StoreError::Put {
                source: Box::new(e),
            })?;

        info!(
            "Successfully stored forecast record {} in {}",
            record.id, self.table_name
        );
        Ok(())
    }
}
