use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Relative path of the forecast endpoint, resolved against a base location.
pub const FORECAST_PATH: &str = "/weatherforecast";

/// One row of the weather forecast.
///
/// `date` doubles as the row identity: the server never returns two entries
/// for the same date within one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    /// Forecast date as an ISO-8601 date-time
    #[serde(with = "crate::date_format::iso_date_time")]
    #[schema(value_type = String, format = DateTime)]
    pub date: DateTime<FixedOffset>,
    /// Short human readable description, may be absent
    #[serde(default)]
    pub summary: Option<String>,
    /// Temperature in Celsius
    pub temperature_c: i32,
    /// Temperature in Fahrenheit, as supplied by the server
    pub temperature_f: i32,
}

/// Builds the forecast endpoint URL for `base`.
///
/// An empty base yields the relative path, which the browser resolves
/// against the page origin.
pub fn forecast_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), FORECAST_PATH)
}
