//! Sign-in / sign-up / sign-out orchestration.

use crate::error::CoreError;
use culinify_identity::IdentityProvider;
use culinify_protocol::AuthSession;
use log::{debug, info};
use std::sync::Arc;

/// Orchestrates the credential screens against the identity provider.
///
/// Provider rejection messages are surfaced verbatim so the form can show
/// them to the user, matching the provider-owned wording.
#[derive(Clone)]
pub struct AuthFlow {
    identity: Arc<dyn IdentityProvider>,
}

impl AuthFlow {
    /// Create a flow over the given identity provider.
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    /// Register a new account. On success the caller directs the user to
    /// the sign-in screen; no session is opened.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), CoreError> {
        debug!("sign-up submitted (email_len={})", email.len());
        self.identity.sign_up(email, password).await?;
        Ok(())
    }

    /// Authenticate and return the new session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, CoreError> {
        debug!("sign-in submitted (email_len={})", email.len());
        let session = self.identity.sign_in(email, password).await?;
        info!("sign-in flow succeeded (user_id={})", session.user.id);
        Ok(session)
    }

    /// End the session; the caller navigates back to the landing screen.
    pub async fn sign_out(&self, session: &AuthSession) -> Result<(), CoreError> {
        self.identity.sign_out(session).await?;
        info!("sign-out flow succeeded (user_id={})", session.user.id);
        Ok(())
    }
}
