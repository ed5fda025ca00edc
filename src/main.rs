//! Lambda entrypoint.
//!
//! Builds the HTTP and DynamoDB clients once so warm invocations reuse
//! them, then hands each event to the invocation handler.

mod handler;

use common::ProcessorConfig;
use forecast_store::ForecastStore;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use openmeteo_client::OpenMeteoClient;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        // CloudWatch stamps ingestion time on every line already.
        .without_time()
        .init();

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = ProcessorConfig::from_env().map_err(|e| Error::from(e.to_string()))?;
    info!("Target table: {}", config.target_table);

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = ForecastStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.target_table,
    );
    let fetcher = OpenMeteoClient::new();

    run(service_fn(|event: LambdaEvent<Value>| {
        handler::handle(&fetcher, &store, event)
    }))
    .await
}
