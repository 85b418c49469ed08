//! Generate-screen orchestration.

use crate::error::CoreError;
use crate::service::RecipeService;
use culinify_identity::AuthError;
use culinify_protocol::{AuthSession, GenerateRecipeRequest, SaveRecipeRequest};
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;

/// Literal shown in place of a recipe when generation fails.
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating recipe.";

/// Submission lifecycle for the generate screen.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateState {
    /// No submission in flight.
    Idle,
    /// A submission is in flight; new submissions are rejected.
    Submitting,
    /// Generation succeeded. Persistence is reported independently so a
    /// caller can tell the user their recipe was not durably saved.
    Success {
        recipe: String,
        persistence: PersistenceOutcome,
    },
    /// Generation (or its precondition) failed.
    Failed { message: String },
}

/// Outcome of the fire-after-generation persistence step.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceOutcome {
    /// The recipe was durably saved.
    Saved,
    /// The save failed; the recipe exists only on screen.
    Failed { message: String },
}

/// Result handed back to the caller after a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// Generated recipe text.
    pub recipe: String,
    /// Whether the follow-up save succeeded.
    pub persistence: PersistenceOutcome,
}

/// State machine driving the generate screen.
///
/// `Idle -> Submitting -> (Success | Failed)`; the resting states accept
/// the next submission.
pub struct GenerateFlow {
    service: Arc<RecipeService>,
    state: Mutex<GenerateState>,
}

impl GenerateFlow {
    /// Create a flow over the given service.
    pub fn new(service: Arc<RecipeService>) -> Self {
        Self {
            service,
            state: Mutex::new(GenerateState::Idle),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> GenerateState {
        self.state.lock().clone()
    }

    /// Submit a prompt for the signed-in user.
    ///
    /// Requires a non-empty prompt and an explicit session. A submission
    /// while one is already in flight is rejected without touching the
    /// in-flight state.
    pub async fn submit(
        &self,
        session: Option<&AuthSession>,
        prompt: &str,
    ) -> Result<SubmissionOutcome, CoreError> {
        if prompt.trim().is_empty() {
            return Err(CoreError::BadRequest("prompt cannot be empty".to_string()));
        }
        let user_id = {
            let mut state = self.state.lock();
            if *state == GenerateState::Submitting {
                return Err(CoreError::BadRequest(
                    "a submission is already in progress".to_string(),
                ));
            }
            let Some(session) = session else {
                *state = GenerateState::Failed {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                };
                return Err(CoreError::Auth(AuthError::NotAuthenticated));
            };
            debug!(
                "submission started (user_id={}, prompt_len={})",
                session.user.id,
                prompt.len()
            );
            *state = GenerateState::Submitting;
            session.user.id.clone()
        };

        let generated = self
            .service
            .generate_recipe(&GenerateRecipeRequest {
                prompt: prompt.to_string(),
                user_id: user_id.clone(),
            })
            .await;
        let recipe = match generated {
            Ok(response) => response.recipe,
            Err(err) => {
                warn!("generation failed (user_id={user_id}): {err}");
                *self.state.lock() = GenerateState::Failed {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                };
                return Err(err);
            }
        };

        let persistence = match self
            .service
            .save_recipe(&SaveRecipeRequest {
                user_id: user_id.clone(),
                recipe: recipe.clone(),
            })
            .await
        {
            Ok(_) => PersistenceOutcome::Saved,
            Err(err) => {
                warn!("persistence failed after generation (user_id={user_id}): {err}");
                PersistenceOutcome::Failed {
                    message: err.to_string(),
                }
            }
        };

        info!(
            "submission finished (user_id={}, persisted={})",
            user_id,
            persistence == PersistenceOutcome::Saved
        );
        let outcome = SubmissionOutcome {
            recipe: recipe.clone(),
            persistence: persistence.clone(),
        };
        *self.state.lock() = GenerateState::Success {
            recipe,
            persistence,
        };
        Ok(outcome)
    }
}
