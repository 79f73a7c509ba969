use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::schemas::AppState;

/// Default bind address when neither the CLI nor the environment sets one
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{address}': {source}")]
    InvalidBindAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("static directory '{}' does not exist", .0.display())]
    MissingStaticDir(PathBuf),
}

/// Validated server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,
    /// Directory holding the built frontend, served with an `index.html` fallback
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn new(bind_address: &str, static_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let bind_address = bind_address
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                address: bind_address.to_string(),
                source,
            })?;

        if let Some(dir) = &static_dir {
            if !dir.is_dir() {
                return Err(ConfigError::MissingStaticDir(dir.clone()));
            }
        }

        Ok(Self { bind_address, static_dir })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: None,
        }
    }
}

/// Initialize application state
pub fn initialize_app_state() -> AppState {
    tracing::debug!("Using random forecast source");
    AppState::default()
}
