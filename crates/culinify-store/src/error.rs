//! Error types for recipe store operations.

use thiserror::Error;

/// Errors returned by recipe store clients.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network-level failure reaching the store.
    #[error("store transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store rejected the operation; the message is the store's own.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Decoding a store response failed.
    #[error("store decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
