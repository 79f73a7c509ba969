use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base location of the backend, empty means same origin
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// BCP-47 tag used to format dates (e.g., "en-US")
    pub locale: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            locale: "en-US".to_string(),
        }
    }
}

impl AppSettings {
    /// Create settings from the browser environment
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Some(language) = window.navigator().language() {
                settings.locale = language;
            }

            if let Ok(hostname) = window.location().hostname() {
                // More verbose logging during local development
                if hostname == "localhost" || hostname == "127.0.0.1" {
                    settings.log_level = Level::Debug;
                }
            }

            // Custom settings stored in localStorage win over detected ones
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base)) = storage.get_item("weatherview_api_base") {
                    settings.api_base = api_base;
                }

                if let Ok(Some(log_level)) = storage.get_item("weatherview_log_level") {
                    settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(locale)) = storage.get_item("weatherview_locale") {
                    settings.locale = locale;
                }
            }
        }

        settings
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings from the browser (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_same_origin() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base, "");
        assert_eq!(settings.locale, "en-US");
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_log_level(" warn "), Some(Level::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_global_settings_start_from_defaults() {
        assert_eq!(get_settings(), AppSettings::default());
    }
}
