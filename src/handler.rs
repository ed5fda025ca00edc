//! Invocation handler: fetch a forecast, persist it, report a uniform result.

use common::ProcessorError;
use forecast_store::ForecastStore;
use lambda_runtime::LambdaEvent;
use openmeteo_client::OpenMeteoClient;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

const SUCCESS_MESSAGE: &str = "Weather data stored successfully!";
const FAILURE_MESSAGE: &str = "Failed to store weather data.";

/// Result object returned to the caller. Either both stages completed or
/// the invocation reports failure; no partial-success state exists.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    pub status: &'static str,
    pub message: &'static str,
}

async fn process(
    fetcher: &OpenMeteoClient,
    store: &ForecastStore,
) -> Result<String, ProcessorError> {
    let record = fetcher.fetch().await?;
    store.put(&record).await?;
    Ok(record.id)
}

/// Handle one invocation. The payload is accepted but its content ignored.
///
/// Errors from either stage are logged here and flattened into the uniform
/// error result; internal detail never reaches the caller.
pub async fn handle(
    fetcher: &OpenMeteoClient,
    store: &ForecastStore,
    event: LambdaEvent<Value>,
) -> Result<InvocationResult, lambda_runtime::Error> {
    let (_payload, context) = event.into_parts();
    info!("Processing invocation {}", context.request_id);

    match process(fetcher, store).await {
        Ok(id) => {
            info!("Stored weather record {}", id);
            Ok(InvocationResult {
                status: "success",
                message: SUCCESS_MESSAGE,
            })
        }
        Err(e) => {
            error!("Invocation failed: {}", e);
            Ok(InvocationResult {
                status: "error",
                message: FAILURE_MESSAGE,
            })
        }
    }
}
