//! Service configuration
//!
//! ## Sources (in precedence order, later wins)
//!
//! 1. Built-in defaults (`0.0.0.0:5000`, `info`, text logs)
//! 2. YAML file given with `--config`
//! 3. Environment: `FA2MS_HOST`, `FA2MS_PORT`, `FA2MS_LOG`
//! 4. Command-line flags
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 8080
//! logging:
//!   level: debug
//!   format: json
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::{Fa2msError, Result};

pub const ENV_HOST: &str = "FA2MS_HOST";
pub const ENV_PORT: &str = "FA2MS_PORT";
pub const ENV_LOG: &str = "FA2MS_LOG";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolve host and port into a bindable address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                Fa2msError::Config(format!(
                    "Invalid listen address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `fa2ms=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Load a YAML configuration file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Fa2msError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_yaml_ng::from_str(&contents).map_err(|e| {
            Fa2msError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Defaults, overlaid with the file when one is given, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay `FA2MS_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST).filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT).filter(|p| !p.is_empty()) {
            self.server.port = port.parse().map_err(|_| {
                Fa2msError::Config(format!("{} must be a port number, got '{}'", ENV_PORT, port))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG).filter(|l| !l.is_empty()) {
            self.logging.level = level;
        }
        Ok(())
    }
}
