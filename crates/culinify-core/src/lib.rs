//! Recipe submission and persistence pipeline for Culinify.
//!
//! This crate owns the generation gateway semantics, the persistence
//! gateway semantics, and the view orchestration flows built on top of
//! them. The HTTP server and any embedding front-end both go through
//! `RecipeService`, so validation and fallback behavior live in one place.

pub mod error;
pub mod flow;
pub mod generator;
pub mod service;

pub use error::CoreError;
pub use flow::{
    AuthFlow, GenerateFlow, GenerateState, HistoryEntry, HistoryFlow, HistoryState,
    PersistenceOutcome, SubmissionOutcome, GENERATION_FAILED_MESSAGE,
};
pub use generator::{RecipeGenerator, WebhookGenerator, FALLBACK_RECIPE};
pub use service::{
    RecipeService, MISSING_PROMPT_OR_USER_ID, MISSING_USER_ID_OR_RECIPE, RECIPE_SAVED_MESSAGE,
};
