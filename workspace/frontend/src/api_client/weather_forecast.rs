use common::{forecast_url, WeatherForecast};
use web_sys::AbortSignal;

use super::{get, ClientError};

/// Fetches the forecast list from `base` (empty for same origin).
///
/// Entries come back exactly as the server sent them: no sorting,
/// filtering or validation beyond deserialization. Aborting `signal`
/// cancels the request.
pub async fn fetch_forecasts(
    base: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<WeatherForecast>, ClientError> {
    let url = forecast_url(base);
    log::trace!("Fetching weather forecasts from {}", url);

    let forecasts = get::<Vec<WeatherForecast>>(&url, signal).await?;
    log::info!("Fetched {} forecast entries", forecasts.len());

    Ok(forecasts)
}
