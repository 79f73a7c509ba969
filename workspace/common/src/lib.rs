//! Common transport-layer types shared between backend and frontend.
//! The backend serializes these shapes on the forecast endpoint and the
//! frontend deserializes the very same structs, so the wire format lives in
//! exactly one place.

mod date_format;
mod forecast;

pub use date_format::{format_calendar_date, parse_date_time};
pub use forecast::{forecast_url, WeatherForecast, FORECAST_PATH};
