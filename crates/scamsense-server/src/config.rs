//! Server configuration
//!
//! Values are resolved in three layers, later layers winning:
//! built-in defaults, an optional TOML file, then command-line flags and
//! environment variables.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::path::Path;

use crate::error::{Result, ServerError};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable output for local development
    Pretty,
}

/// Configuration for the HTTP service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// Whether to send permissive CORS headers for the browser client
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_size: default_max_body_size(),
            cors_enabled: true,
            log_format: LogFormat::default(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_body_size: Option<usize>,
    pub log_format: Option<LogFormat>,
    pub disable_cors: bool,
}

impl ServerConfig {
    /// Load configuration from a TOML file; missing keys take their defaults
    ///
    /// Values are not range-checked here; [`ServerConfig::load`] validates
    /// the effective configuration after overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::FileError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the effective configuration from an optional file and overrides
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(max_body_size) = overrides.max_body_size {
            self.max_body_size = max_body_size;
        }
        if let Some(log_format) = overrides.log_format {
            self.log_format = log_format;
        }
        if overrides.disable_cors {
            self.cors_enabled = false;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ServerError::InvalidConfig(
                "port must be greater than zero".to_string(),
            ));
        }
        if self.max_body_size == 0 {
            return Err(ServerError::InvalidConfig(
                "max_body_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address the listener binds to
    ///
    /// `host` may be an IPv4 or IPv6 literal or a resolvable hostname.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if let Ok(ip) = self.host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| {
                ServerError::InvalidConfig(format!("invalid listen address '{}': {}", self.host, e))
            })?
            .next()
            .ok_or_else(|| {
                ServerError::InvalidConfig(format!("host '{}' did not resolve", self.host))
            })
    }
}
