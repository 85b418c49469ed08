//! Public SDK surface for Culinify.
//!
//! This crate re-exports the pipeline building blocks and provides a
//! small initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use culinify_config as config;
pub use culinify_core as core;
/// Re-export for convenience.
pub use culinify_identity as identity;
/// Re-export for convenience.
pub use culinify_protocol as protocol;
/// Re-export for convenience.
pub use culinify_server as server;
/// Re-export for convenience.
pub use culinify_store as store;

#[inline]
/// Initialize logging using env_logger.
///
/// Safe to call more than once; later calls are no-ops. Binaries are
/// expected to call this early in startup so log output is wired up.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
