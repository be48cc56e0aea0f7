//! Environment-variable configuration for the storefront binary.

use std::path::PathBuf;

use thiserror::Error;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Parsed configuration from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port (`HTTP_PORT`, default 8000).
    pub http_port: u16,
    /// Bind address (`BIND_ADDRESS`, default 0.0.0.0).
    pub bind_address: String,
    /// SQLite database path (`DATABASE_PATH`, default ./data/storefront.db).
    pub database_path: PathBuf,
}

impl AppConfig {
    /// Parse configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if a set variable has an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let http_port = match lookup("HTTP_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "HTTP_PORT",
                value: raw,
            })?,
            None => DEFAULT_HTTP_PORT,
        };

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string());

        let database_path = lookup("DATABASE_PATH")
            .map_or_else(|| PathBuf::from("./data/storefront.db"), PathBuf::from);

        Ok(Self {
            http_port,
            bind_address,
            database_path,
        })
    }
}
