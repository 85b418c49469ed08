//! View orchestration flows.
//!
//! Flows expose state, they do not render. Sessions are passed in
//! explicitly so the identity dependency stays injectable.

mod auth;
mod generate;
mod history;

pub use auth::AuthFlow;
pub use generate::{
    GenerateFlow, GenerateState, PersistenceOutcome, SubmissionOutcome, GENERATION_FAILED_MESSAGE,
};
pub use history::{HistoryEntry, HistoryFlow, HistoryState};
