//! Configuration models and loading for Culinify.
//!
//! This crate owns the config schema, validation, and the
//! defaults-file-environment layering used by the server binary.

mod error;
mod load;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::*;
