//! Persisted forecast document types.

use serde::{Deserialize, Serialize};

/// The record written to the forecast table, one per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Primary key. A fresh UUID assigned before the upstream request goes
    /// out, so every store attempt traces back to exactly one fetch.
    pub id: String,
    pub forecast: Forecast,
}

/// Reduced forecast document extracted from the Open-Meteo response.
///
/// The field list here is the projection: deserializing drops every other
/// upstream field (current conditions, humidity, wind speed series) and
/// fails if a required field is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub generationtime_ms: f64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: i64,
    pub hourly_units: HourlyUnits,
    pub hourly: HourlySeries,
}

/// Unit labels for the retained hourly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyUnits {
    pub time: String,
    pub temperature_2m: String,
}

/// Retained hourly series: timestamps and air temperature readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
}
