//! Gateway semantics shared by the HTTP server and the flows.

use crate::error::CoreError;
use crate::generator::RecipeGenerator;
use culinify_protocol::{
    GenerateRecipeRequest, GenerateRecipeResponse, SaveRecipeRequest, SaveRecipeResponse,
};
use culinify_store::RecipeStore;
use log::{debug, info};
use std::sync::Arc;

/// Error literal for a generate request missing a field.
pub const MISSING_PROMPT_OR_USER_ID: &str = "Missing prompt or userId";
/// Error literal for a save request missing a field.
pub const MISSING_USER_ID_OR_RECIPE: &str = "Missing userId or recipe";
/// Acknowledgment literal for a successful save.
pub const RECIPE_SAVED_MESSAGE: &str = "Recipe saved successfully";

/// Stateless service implementing both gateway contracts.
#[derive(Clone)]
pub struct RecipeService {
    generator: Arc<dyn RecipeGenerator>,
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    /// Create a service over the given generator and store.
    pub fn new(generator: Arc<dyn RecipeGenerator>, store: Arc<dyn RecipeStore>) -> Self {
        Self { generator, store }
    }

    /// Generation gateway: validate the two required fields, forward the
    /// prompt only, and return the generated (or fallback) text.
    ///
    /// The `user_id` is accepted for the caller's downstream persistence
    /// step and intentionally not forwarded upstream.
    pub async fn generate_recipe(
        &self,
        request: &GenerateRecipeRequest,
    ) -> Result<GenerateRecipeResponse, CoreError> {
        if request.prompt.is_empty() || request.user_id.is_empty() {
            return Err(CoreError::BadRequest(MISSING_PROMPT_OR_USER_ID.to_string()));
        }
        debug!(
            "generate gateway accepted request (user_id={}, prompt_len={})",
            request.user_id,
            request.prompt.len()
        );
        let recipe = self.generator.generate(&request.prompt).await?;
        Ok(GenerateRecipeResponse { recipe })
    }

    /// Persistence gateway: validate the two required fields and perform
    /// exactly one insert. No dedup, no upsert.
    pub async fn save_recipe(
        &self,
        request: &SaveRecipeRequest,
    ) -> Result<SaveRecipeResponse, CoreError> {
        if request.user_id.is_empty() || request.recipe.is_empty() {
            return Err(CoreError::BadRequest(MISSING_USER_ID_OR_RECIPE.to_string()));
        }
        self.store.insert(&request.user_id, &request.recipe).await?;
        info!("save gateway persisted recipe (user_id={})", request.user_id);
        Ok(SaveRecipeResponse {
            message: RECIPE_SAVED_MESSAGE.to_string(),
        })
    }
}
