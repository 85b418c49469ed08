//! Config loading: built-in defaults, optional JSON5 file, env overrides.

use crate::{ConfigError, CulinifyConfig};
use log::{debug, info};
use std::env;
use std::fs;
use std::path::Path;

/// Env var overriding the managed service url.
const ENV_SERVICE_URL: &str = "CULINIFY_SERVICE_URL";
/// Env var overriding the managed service public key.
const ENV_SERVICE_ANON_KEY: &str = "CULINIFY_SERVICE_ANON_KEY";
/// Env var overriding the generation endpoint url.
const ENV_GENERATION_ENDPOINT_URL: &str = "CULINIFY_GENERATION_ENDPOINT_URL";
/// Env var overriding the server bind host.
const ENV_SERVER_HOST: &str = "CULINIFY_SERVER_HOST";
/// Env var overriding the server bind port.
const ENV_SERVER_PORT: &str = "CULINIFY_SERVER_PORT";

impl CulinifyConfig {
    /// Load a config from a JSON5 file (no env overrides).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a config from JSON5 contents (no env overrides).
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: serde_json::Value = json5::from_str(contents)?;
        let config: CulinifyConfig = serde_json::from_value(value)?;
        Ok(config)
    }

    /// Load the effective config: defaults, then the optional file, then
    /// process environment overrides. Precedence is low to high.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::load_from_path(path)?,
            Some(path) => {
                debug!("config file missing, using defaults (path={})", path.display());
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env()?;
        info!(
            "effective config loaded (server={}:{}, generation_endpoint_len={})",
            config.server.host,
            config.server.port,
            config.generation.endpoint_url.len()
        );
        Ok(config)
    }

    /// Apply process environment overrides in place.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = env::var(ENV_SERVICE_URL) {
            self.service.url = url;
        }
        if let Ok(key) = env::var(ENV_SERVICE_ANON_KEY) {
            self.service.anon_key = key;
        }
        if let Ok(url) = env::var(ENV_GENERATION_ENDPOINT_URL) {
            self.generation.endpoint_url = url;
        }
        if let Ok(host) = env::var(ENV_SERVER_HOST) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(ENV_SERVER_PORT) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidField {
                path: "server.port".to_string(),
                message: format!("not a port number: {port}"),
            })?;
        }
        Ok(())
    }
}
