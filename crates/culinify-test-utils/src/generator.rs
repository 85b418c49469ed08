use async_trait::async_trait;
use culinify_core::{CoreError, RecipeGenerator};
use parking_lot::Mutex;

/// Generator returning a fixed recipe and recording prompts.
#[derive(Default)]
pub struct StubGenerator {
    recipe: String,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(recipe: impl Into<String>) -> Self {
        Self {
            recipe: recipe.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl RecipeGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, CoreError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.recipe.clone())
    }
}

/// Generator failing every call with an upstream error.
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RecipeGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, CoreError> {
        Err(CoreError::Upstream(self.message.clone()))
    }
}
