//! Identity provider client for Culinify.
//!
//! Wraps the managed auth service consumed by the flows: sign-up, sign-in,
//! sign-out, current-user lookup, and the auth-state-change subscription.
//! The provider itself is external; this crate only speaks its API.

mod error;
mod event_bus;
mod http;

pub use error::AuthError;
pub use event_bus::AuthEventBus;
pub use http::HttpIdentityProvider;

use async_trait::async_trait;
use culinify_protocol::{AuthSession, AuthUser};

/// Identity provider abstraction used by the flows.
///
/// Sessions are passed in explicitly by callers; there is no ambient
/// current-user state on this seam.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new user with email and password.
    ///
    /// The provider does not open a session on sign-up; callers direct the
    /// user to sign in afterwards.
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// Authenticate with email and password, returning an active session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// End the given session.
    async fn sign_out(&self, session: &AuthSession) -> Result<(), AuthError>;

    /// Resolve the user behind a session, verifying it with the provider.
    async fn current_user(&self, session: &AuthSession) -> Result<AuthUser, AuthError>;
}
