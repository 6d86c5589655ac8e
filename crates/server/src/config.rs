//! Configuration management for the StudyChat server

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server configuration
    pub http: HttpConfig,

    /// Upstream provider configuration
    pub upstream: UpstreamConfig,

    /// Directory holding the built frontend; served with an index
    /// fallback when set
    #[serde(default)]
    pub static_dir: Option<String>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Address to bind HTTP server
    pub bind_addr: SocketAddr,

    /// Enable CORS for web interface
    pub cors_enabled: bool,
}

/// Upstream chat provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the OpenAI-compatible provider
    pub url: String,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,

    /// API key for the provider
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model requested from the provider
    pub model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            upstream: UpstreamConfig::default(),
            static_dir: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            cors_enabled: true,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://api.deepseek.com/v1".to_string(),
            timeout_secs: 60,
            api_key: None,
            model: "deepseek-chat".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("STUDYCHAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("http.bind_addr", defaults.http.bind_addr.to_string())?
            .set_default("http.cors_enabled", defaults.http.cors_enabled)?
            .set_default("upstream.url", defaults.upstream.url)?
            .set_default("upstream.timeout_secs", defaults.upstream.timeout_secs)?
            .set_default("upstream.model", defaults.upstream.model)?
            .add_source(
                config::Environment::with_prefix("STUDYCHAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = ServerConfig::default();
        assert_eq!(config.http.bind_addr.port(), 8080);
        assert!(config.upstream.api_key.is_none());
        assert!(config.static_dir.is_none());
    }
}
