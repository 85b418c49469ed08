use async_trait::async_trait;
use culinify_identity::{AuthError, IdentityProvider};
use culinify_protocol::{AuthSession, AuthUser};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build a session for tests without going through a provider.
pub fn session_for(user_id: &str) -> AuthSession {
    AuthSession {
        access_token: format!("token-{user_id}"),
        user: AuthUser {
            id: user_id.to_string(),
            email: None,
        },
    }
}

/// Identity provider accepting every operation for a fixed user, or
/// rejecting everything with a fixed message.
#[derive(Default)]
pub struct StubIdentity {
    user_id: String,
    rejection: Option<String>,
    sign_ups: Mutex<Vec<String>>,
    sign_outs: AtomicUsize,
}

impl StubIdentity {
    /// Provider that authenticates as the given user.
    pub fn with_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Provider that rejects every operation with the given message.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            rejection: Some(message.into()),
            ..Self::default()
        }
    }

    /// Emails that attempted sign-up, in order.
    pub fn sign_ups(&self) -> Vec<String> {
        self.sign_ups.lock().clone()
    }

    /// Number of completed sign-outs.
    pub fn sign_outs(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }

    fn check_rejection(&self) -> Result<(), AuthError> {
        match &self.rejection {
            Some(message) => Err(AuthError::Rejected {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        self.check_rejection()?;
        self.sign_ups.lock().push(email.to_string());
        Ok(())
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        self.check_rejection()?;
        Ok(session_for(&self.user_id))
    }

    async fn sign_out(&self, _session: &AuthSession) -> Result<(), AuthError> {
        self.check_rejection()?;
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn current_user(&self, session: &AuthSession) -> Result<AuthUser, AuthError> {
        self.check_rejection()?;
        Ok(session.user.clone())
    }
}
