//! Error types for identity provider operations.

use thiserror::Error;

/// Errors returned by identity provider clients.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Network-level failure reaching the provider.
    #[error("auth transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider rejected the operation.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Decoding a provider response failed.
    #[error("auth decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// An operation requiring a session was attempted without one.
    #[error("no active session")]
    NotAuthenticated,
}
