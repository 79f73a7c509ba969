use axum::{extract::State, response::Json};
use chrono::Utc;
use common::WeatherForecast;
use tracing::{debug, instrument};

use crate::schemas::AppState;

/// Get the weather forecast for the coming days
///
/// Returns a bare JSON array; entries are ordered by date and each date
/// occurs once.
#[utoipa::path(
    get,
    path = "/weatherforecast",
    tag = "weather",
    responses(
        (status = 200, description = "Forecast retrieved successfully", body = [WeatherForecast])
    )
)]
#[instrument(skip(state))]
pub async fn get_weather_forecast(State(state): State<AppState>) -> Json<Vec<WeatherForecast>> {
    let today = Utc::now().date_naive();
    let forecasts = state.forecasts.forecasts(today);
    debug!("Generated {} forecast entries starting after {}", forecasts.len(), today);

    Json(forecasts)
}
