//! Open-Meteo forecast client.
//!
//! Fetches the hourly forecast for a fixed location and projects the
//! response into the reduced [`ForecastRecord`] document that gets
//! persisted downstream.

use common::{FetchError, Forecast, ForecastRecord};
use tracing::debug;
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";
const FORECAST_PATH: &str = "/v1/forecast";

const LATITUDE: &str = "52.52";
const LONGITUDE: &str = "13.41";
const CURRENT_VARIABLES: &str = "temperature_2m,wind_speed_10m";
const HOURLY_VARIABLES: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m";

/// Open-Meteo API client with connection pooling.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different API host (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("weather-processor/0.1")
            .pool_max_idle_per_host(4)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build Open-Meteo HTTP client");

        Self { client, base_url }
    }

    /// Fetch the forecast and shape it into a [`ForecastRecord`].
    ///
    /// The record id is assigned before the request goes out, so a failed
    /// fetch or store still correlates to exactly one attempt.
    pub async fn fetch(&self) -> Result<ForecastRecord, FetchError> {
        let id = Uuid::new_v4().to_string();

        let url = format!("{}{}", self.base_url, FORECAST_PATH);
        debug!("Fetching forecast: {} (record id {})", url, id);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("latitude", LATITUDE),
                ("longitude", LONGITUDE),
                ("current", CURRENT_VARIABLES),
                ("hourly", HOURLY_VARIABLES),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                body: body[..body.len().min(500)].to_string(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;
        let forecast: Forecast =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        debug!(
            "Forecast for ({}, {}): {} hourly samples",
            forecast.latitude,
            forecast.longitude,
            forecast.hourly.time.len()
        );

        Ok(ForecastRecord { id, forecast })
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// An upstream response carrying more than the processor keeps: a
    /// current-conditions block plus humidity and wind-speed series.
    fn sample_response() -> &'static str {
        r#"{
            "latitude": 52.52,
            "longitude": 13.41,
            "generationtime_ms": 0.5,
            "utc_offset_seconds": 3600,
            "timezone": "Europe/Berlin",
            "timezone_abbreviation": "CET",
            "elevation": 38.0,
            "current_units": {"time": "iso8601", "temperature_2m": "°C", "wind_speed_10m": "km/h"},
            "current": {"time": "2024-01-01T00:00", "temperature_2m": 4.2, "wind_speed_10m": 11.3},
            "hourly_units": {
                "time": "iso8601",
                "temperature_2m": "°C",
                "relative_humidity_2m": "%",
                "wind_speed_10m": "km/h"
            },
            "hourly": {
                "time": ["2024-01-01T00:00", "2024-01-01T01:00"],
                "temperature_2m": [5.0, 4.6],
                "relative_humidity_2m": [81, 83],
                "wind_speed_10m": [11.3, 12.8]
            }
        }"#
    }

    async fn mock_upstream(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .and(query_param("latitude", LATITUDE))
            .and(query_param("longitude", LONGITUDE))
            .and(query_param("current", CURRENT_VARIABLES))
            .and(query_param("hourly", HOURLY_VARIABLES))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_deserialize_forecast() {
        let forecast: Forecast =
            serde_json::from_str(sample_response()).expect("response should deserialize");

        assert!((forecast.latitude - 52.52).abs() < f64::EPSILON);
        assert!((forecast.elevation - 38.0).abs() < f64::EPSILON);
        assert_eq!(forecast.timezone, "Europe/Berlin");
        assert_eq!(forecast.timezone_abbreviation, "CET");
        assert_eq!(forecast.utc_offset_seconds, 3600);
        assert_eq!(forecast.hourly.time.len(), 2);
        assert_eq!(forecast.hourly.temperature_2m, vec![5.0, 4.6]);
        assert_eq!(forecast.hourly_units.time, "iso8601");
        assert_eq!(forecast.hourly_units.temperature_2m, "°C");
    }

    #[test]
    fn test_projection_keeps_only_declared_fields() {
        let forecast: Forecast =
            serde_json::from_str(sample_response()).expect("response should deserialize");
        let doc = serde_json::to_value(&forecast).expect("forecast should serialize");

        let mut top: Vec<&str> = doc
            .as_object()
            .expect("forecast should be an object")
            .keys()
            .map(String::as_str)
            .collect();
        top.sort_unstable();
        assert_eq!(
            top,
            vec![
                "elevation",
                "generationtime_ms",
                "hourly",
                "hourly_units",
                "latitude",
                "longitude",
                "timezone",
                "timezone_abbreviation",
                "utc_offset_seconds",
            ]
        );

        let hourly = doc["hourly"].as_object().expect("hourly should be an object");
        assert!(hourly.contains_key("time"));
        assert!(hourly.contains_key("temperature_2m"));
        assert!(!hourly.contains_key("relative_humidity_2m"));
        assert!(!hourly.contains_key("wind_speed_10m"));

        let units = doc["hourly_units"]
            .as_object()
            .expect("hourly_units should be an object");
        assert_eq!(units.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_builds_record() {
        let server = mock_upstream(
            ResponseTemplate::new(200).set_body_raw(sample_response(), "application/json"),
        )
        .await;
        let client = OpenMeteoClient::with_base_url(server.uri());

        let record = client.fetch().await.expect("fetch should succeed");

        Uuid::parse_str(&record.id).expect("record id should be a valid UUID");
        assert!((record.forecast.elevation - 38.0).abs() < f64::EPSILON);
        assert_eq!(record.forecast.hourly.temperature_2m, vec![5.0, 4.6]);
    }

    #[tokio::test]
    async fn test_fetch_ids_are_unique() {
        let server = mock_upstream(
            ResponseTemplate::new(200).set_body_raw(sample_response(), "application/json"),
        )
        .await;
        let client = OpenMeteoClient::with_base_url(server.uri());

        let first = client.fetch().await.expect("first fetch should succeed");
        let second = client.fetch().await.expect("second fetch should succeed");

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_fetch_unexpected_status() {
        let server =
            mock_upstream(ResponseTemplate::new(500).set_body_string("upstream exploded")).await;
        let client = OpenMeteoClient::with_base_url(server.uri());

        let err = client.fetch().await.expect_err("fetch should fail");
        match err {
            FetchError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = mock_upstream(
            ResponseTemplate::new(200).set_body_raw("not json at all", "application/json"),
        )
        .await;
        let client = OpenMeteoClient::with_base_url(server.uri());

        let err = client.fetch().await.expect_err("fetch should fail");
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_missing_required_fields() {
        let server = mock_upstream(
            ResponseTemplate::new(200).set_body_raw(r#"{"latitude": 52.52}"#, "application/json"),
        )
        .await;
        let client = OpenMeteoClient::with_base_url(server.uri());

        let err = client.fetch().await.expect_err("fetch should fail");
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
