#[cfg(test)]
pub mod test_utils {
    use crate::forecast::ForecastSource;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use common::{parse_date_time, WeatherForecast};
    use std::path::Path;
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Forecast source returning a canned list regardless of the date
    #[derive(Debug, Clone, Default)]
    pub struct FixedForecast(pub Vec<WeatherForecast>);

    impl ForecastSource for FixedForecast {
        fn forecasts(&self, _today: NaiveDate) -> Vec<WeatherForecast> {
            self.0.clone()
        }
    }

    pub fn forecast_entry(date: &str, summary: Option<&str>, temperature_c: i32) -> WeatherForecast {
        WeatherForecast {
            date: parse_date_time(date).expect("valid test date"),
            summary: summary.map(str::to_string),
            temperature_c,
            temperature_f: crate::forecast::fahrenheit(temperature_c),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// Installs one global subscriber for the whole test binary; later calls
    /// are no-ops. The log level is determined by the RUST_LOG environment
    /// variable, defaulting to WARN if not set.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    }

    /// Create axum app backed by the random forecast source
    pub fn setup_test_app() -> Router {
        init_test_tracing();
        create_router(AppState::default(), None)
    }

    /// Create axum app serving a fixed forecast
    pub fn setup_fixed_app(forecasts: Vec<WeatherForecast>) -> Router {
        init_test_tracing();
        create_router(AppState::new(Arc::new(FixedForecast(forecasts))), None)
    }

    /// Create axum app that also hosts the frontend from `static_dir`
    pub fn setup_static_app(static_dir: &Path) -> Router {
        init_test_tracing();
        create_router(AppState::default(), Some(static_dir))
    }
}
