//! Forecast generation for the `/weatherforecast` endpoint.

use std::fmt::Debug;

use chrono::{Days, NaiveDate, NaiveTime};
use common::WeatherForecast;
use rand::Rng;

/// Summaries a generated forecast picks from
pub const SUMMARIES: [&str; 10] = [
    "Freezing", "Bracing", "Chilly", "Cool", "Mild", "Warm", "Balmy", "Hot", "Sweltering", "Scorching",
];

/// Number of days covered by one response, starting tomorrow
pub const FORECAST_DAYS: u64 = 5;

/// Lowest generated temperature in Celsius (inclusive)
pub const MIN_TEMPERATURE_C: i32 = -20;

/// Highest generated temperature in Celsius (exclusive)
pub const MAX_TEMPERATURE_C: i32 = 55;

/// Produces the forecast served to clients.
pub trait ForecastSource: Send + Sync + Debug {
    /// Forecast entries for the days following `today`, one per date.
    fn forecasts(&self, today: NaiveDate) -> Vec<WeatherForecast>;
}

/// Random forecast for the next [`FORECAST_DAYS`] days
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomForecast;

impl ForecastSource for RandomForecast {
    fn forecasts(&self, today: NaiveDate) -> Vec<WeatherForecast> {
        let mut rng = rand::rng();

        (1..=FORECAST_DAYS)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .map(|date| {
                let temperature_c = rng.random_range(MIN_TEMPERATURE_C..MAX_TEMPERATURE_C);
                let summary = SUMMARIES[rng.random_range(0..SUMMARIES.len())];

                WeatherForecast {
                    date: date.and_time(NaiveTime::MIN).and_utc().into(),
                    summary: Some(summary.to_string()),
                    temperature_c,
                    temperature_f: fahrenheit(temperature_c),
                }
            })
            .collect()
    }
}

/// Celsius to Fahrenheit, truncated toward zero.
pub fn fahrenheit(celsius: i32) -> i32 {
    32 + (celsius as f64 / 0.5556) as i32
}
