//! Server configuration.
//!
//! Read from environment variables, falling back to defaults suitable for
//! local development.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "SHIPPING_ROUTES_ADDR";

/// Environment variable holding the catalogue JSON path.
pub const DATA_VAR: &str = "SHIPPING_ROUTES_DATA";

/// Environment variable holding the result limit.
pub const MAX_RESULTS_VAR: &str = "SHIPPING_ROUTES_MAX_RESULTS";

/// Error from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address could not be parsed
    #[error("SHIPPING_ROUTES_ADDR={value:?} is not a socket address: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// A numeric setting could not be parsed
    #[error("{name}={value:?} is not a number")]
    InvalidNumber { name: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Catalogue file to load. The built-in landscape is used when unset.
    pub data_path: Option<PathBuf>,

    /// Maximum number of journeys listed in one response.
    /// The count and shortest voyage always cover every journey found.
    pub max_results: usize,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
        }

        if let Some(value) = lookup(DATA_VAR).filter(|v| !v.is_empty()) {
            config.data_path = Some(PathBuf::from(value));
        }

        if let Some(value) = lookup(MAX_RESULTS_VAR) {
            config.max_results = value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: MAX_RESULTS_VAR,
                value,
            })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: None,
            max_results: 100,
        }
    }
}
