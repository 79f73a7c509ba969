use std::sync::Arc;

use common::WeatherForecast;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::forecast::{ForecastSource, RandomForecast};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Source of the served forecast
    pub forecasts: Arc<dyn ForecastSource>,
}

impl AppState {
    pub fn new(forecasts: Arc<dyn ForecastSource>) -> Self {
        Self { forecasts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RandomForecast))
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::weather_forecast::get_weather_forecast,
    ),
    components(
        schemas(
            WeatherForecast,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "weather", description = "Weather forecast endpoints"),
    ),
    info(
        title = "Weatherview API",
        description = "Serves the weather forecast shown by the Weatherview page",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
