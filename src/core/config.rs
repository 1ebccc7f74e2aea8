//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Default base URL for the RevROI upstream API.
pub const DEFAULT_BASE_URL: &str = "https://revroi.oaroulette.com";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream API configuration.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream RevROI API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Initial base URL for upstream requests. Mutable at runtime via the
    /// `set_base_url` tool; never persisted across restarts.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "revroi-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, and
    /// `REVROI_BASE_URL` (seeds the initial upstream base URL).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("REVROI_BASE_URL") {
            info!("Upstream base URL seeded from environment: {}", base_url);
            config.upstream.base_url = base_url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.upstream.base_url, "https://revroi.oaroulette.com");
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("REVROI_BASE_URL", "http://localhost:3000");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.base_url, "http://localhost:3000");
        unsafe {
            std::env::remove_var("REVROI_BASE_URL");
        }
    }

    #[test]
    fn test_base_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("REVROI_BASE_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
    }
}
