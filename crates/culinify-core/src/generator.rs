//! Recipe generation against the external workflow endpoint.

use crate::error::CoreError;
use async_trait::async_trait;
use culinify_protocol::{GenerationPayload, GenerationReply};
use log::{debug, info, warn};

/// Literal substituted when the endpoint replies without a `recipe` field.
pub const FALLBACK_RECIPE: &str = "No recipe returned";

/// Generator abstraction used by the generation gateway.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Produce recipe text for a prompt. One attempt, fail fast; no retry,
    /// no timeout override, no circuit breaking.
    async fn generate(&self, prompt: &str) -> Result<String, CoreError>;
}

/// Generator issuing a single JSON POST to a fixed webhook url.
#[derive(Clone)]
pub struct WebhookGenerator {
    client: reqwest::Client,
    endpoint_url: String,
}

impl WebhookGenerator {
    /// Create a generator against the configured endpoint.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        let endpoint_url = endpoint_url.into();
        info!("webhook generator initialized (endpoint_len={})", endpoint_url.len());
        Self {
            client: reqwest::Client::new(),
            endpoint_url,
        }
    }
}

#[async_trait]
impl RecipeGenerator for WebhookGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, CoreError> {
        debug!("forwarding prompt to generation endpoint (prompt_len={})", prompt.len());
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&GenerationPayload {
                prompt: prompt.to_string(),
            })
            .send()
            .await
            .map_err(|err| CoreError::Upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("generation endpoint returned non-success (status={status})");
            return Err(CoreError::Upstream(format!(
                "generation endpoint returned status {status}"
            )));
        }

        let reply: GenerationReply = response
            .json()
            .await
            .map_err(|err| CoreError::Upstream(err.to_string()))?;
        let recipe = recipe_from_reply(reply);
        debug!("generation succeeded (recipe_len={})", recipe.len());
        Ok(recipe)
    }
}

/// Extract the recipe text, substituting the fallback when the endpoint
/// omits the field or sends it empty.
fn recipe_from_reply(reply: GenerationReply) -> String {
    match reply.recipe {
        Some(recipe) if !recipe.is_empty() => recipe,
        _ => {
            warn!("generation reply missing recipe field, using fallback");
            FALLBACK_RECIPE.to_string()
        }
    }
}
