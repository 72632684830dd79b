//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `TODO_*` environment variables, then a bare `PORT`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Load error: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to listen on
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServerConfig {
    /// Socket address built from host and port
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Validation(format!("invalid listen address: {}:{}", self.host, self.port)))
    }

    /// Check that the settings can be used to start a server
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Validation("log_level must not be empty".to_string()));
        }
        self.bind_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

/// Loads `ServerConfig` from file and environment
pub struct ConfigLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
    /// Environment snapshot; `None` reads the process environment
    env: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Loader reading `TODO_CONFIG` (default `todo.toml`) and the process environment
    pub fn new() -> Self {
        let config_path = std::env::var("TODO_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("todo.toml"));
        Self::with_path(config_path)
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "TODO".to_string(),
            env: None,
        }
    }

    /// Use a fixed set of variables instead of the process environment
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Build, deserialize and validate the configuration
    pub fn load(&self) -> Result<ServerConfig> {
        let defaults = ServerConfig::default();
        let port_override = match &self.env {
            Some(env) => env.get("PORT").cloned(),
            None => std::env::var("PORT").ok(),
        };

        let mut builder = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix).source(self.env.clone()));

        if let Some(port) = port_override.filter(|p| !p.is_empty()) {
            builder = builder.set_override("port", port)?;
        }

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
