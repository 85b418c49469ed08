//! Error taxonomy for the recipe pipeline.

use thiserror::Error;

/// Errors returned by pipeline operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field was missing or empty; client-correctable.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The external generation call failed or returned non-success.
    #[error("upstream error: {0}")]
    Upstream(String),
    /// Persistence read/write failure.
    #[error("store error: {0}")]
    Store(#[from] culinify_store::StoreError),
    /// No active session where one is required.
    #[error("auth error: {0}")]
    Auth(#[from] culinify_identity::AuthError),
}
