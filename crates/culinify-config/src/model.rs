//! Configuration schema for Culinify.

use serde::{Deserialize, Serialize};

/// Fixed generation endpoint of the original deployment, used when no
/// override is configured.
pub const DEFAULT_GENERATION_ENDPOINT_URL: &str =
    "https://ibraheem123.app.n8n.cloud/webhook/generate-recipe";

/// Root config for the Culinify pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CulinifyConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl CulinifyConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> CulinifyConfigBuilder {
        CulinifyConfigBuilder::new()
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if self.service.url.is_empty() {
            return Err(crate::ConfigError::InvalidField {
                path: "service.url".to_string(),
                message: "managed service url is required".to_string(),
            });
        }
        if self.service.anon_key.is_empty() {
            return Err(crate::ConfigError::InvalidField {
                path: "service.anon_key".to_string(),
                message: "managed service public key is required".to_string(),
            });
        }
        if self.generation.endpoint_url.is_empty() {
            return Err(crate::ConfigError::InvalidField {
                path: "generation.endpoint_url".to_string(),
                message: "generation endpoint url is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for assembling a `CulinifyConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct CulinifyConfigBuilder {
    config: CulinifyConfig,
}

impl CulinifyConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: CulinifyConfig::default(),
        }
    }

    /// Replace the inbound server configuration.
    pub fn server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Replace the managed identity/store service configuration.
    pub fn service(mut self, service: ServiceConfig) -> Self {
        self.config.service = service;
        self
    }

    /// Replace the generation endpoint configuration.
    pub fn generation(mut self, generation: GenerationConfig) -> Self {
        self.config.generation = generation;
        self
    }

    /// Finalize and return the built `CulinifyConfig`.
    pub fn build(self) -> CulinifyConfig {
        self.config
    }
}

/// Inbound HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

/// Default bind host for the inbound server.
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

/// Default bind port for the inbound server.
fn default_server_port() -> u16 {
    3000
}

/// Managed identity-provider/store service settings.
///
/// One project serves both the auth API and the `recipes` table, so a
/// single endpoint and public (anon) key cover both clients.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
}

/// External generation endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_generation_endpoint_url")]
    pub endpoint_url: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_generation_endpoint_url(),
        }
    }
}

/// Default generation endpoint url.
fn default_generation_endpoint_url() -> String {
    DEFAULT_GENERATION_ENDPOINT_URL.to_string()
}
