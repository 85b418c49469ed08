//! Shared state for the gateway handlers.

use culinify_config::CulinifyConfig;
use culinify_core::{RecipeService, WebhookGenerator};
use culinify_store::HttpRecipeStore;
use std::sync::Arc;

/// Application state handed to every handler.
pub struct AppState {
    /// Shared gateway semantics.
    pub service: RecipeService,
}

impl AppState {
    /// Wire the real generator and store from config.
    pub fn from_config(config: &CulinifyConfig) -> Self {
        let generator = WebhookGenerator::new(config.generation.endpoint_url.clone());
        let store = HttpRecipeStore::new(
            config.service.url.clone(),
            config.service.anon_key.clone(),
        );
        Self {
            service: RecipeService::new(Arc::new(generator), Arc::new(store)),
        }
    }

    /// Build state over an existing service (used by tests and embedders).
    pub fn with_service(service: RecipeService) -> Self {
        Self { service }
    }
}
