//! HTTP client for a managed GoTrue-style auth service.

use crate::error::AuthError;
use crate::event_bus::AuthEventBus;
use crate::IdentityProvider;
use async_trait::async_trait;
use culinify_protocol::{AuthChange, AuthSession, AuthUser};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Identity client speaking the managed provider's REST API.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    events: AuthEventBus,
}

/// Credentials payload for sign-up and password sign-in.
#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token grant response returned on successful sign-in.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

impl HttpIdentityProvider {
    /// Create a client against the given service url and public key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = trim_base_url(base_url.into());
        info!("identity provider client initialized (base_url={base_url})");
        Self {
            client: reqwest::Client::new(),
            base_url,
            anon_key: anon_key.into(),
            events: AuthEventBus::default(),
        }
    }

    /// Bus emitting auth-state changes from this client.
    pub fn events(&self) -> &AuthEventBus {
        &self.events
    }

    /// Build a full auth endpoint url.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    /// Convert a non-success provider response into an `AuthError`.
    async fn rejection(response: reqwest::Response) -> AuthError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => rejection_message(status, &body),
            Err(_) => format!("auth request failed with status {status}"),
        };
        warn!("identity provider rejected request (status={status})");
        AuthError::Rejected { status, message }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        debug!("sign-up request (email_len={})", email.len());
        let response = self
            .client
            .post(self.endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        info!("sign-up accepted");
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        debug!("sign-in request (email_len={})", email.len());
        let response = self
            .client
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let token: TokenResponse = response.json().await?;
        let session = AuthSession {
            access_token: token.access_token,
            user: token.user,
        };
        info!("sign-in succeeded (user_id={})", session.user.id);
        self.events.emit(AuthChange::SignedIn {
            user_id: session.user.id.clone(),
        });
        Ok(session)
    }

    async fn sign_out(&self, session: &AuthSession) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        info!("sign-out succeeded (user_id={})", session.user.id);
        self.events.emit(AuthChange::SignedOut);
        Ok(())
    }

    async fn current_user(&self, session: &AuthSession) -> Result<AuthUser, AuthError> {
        let response = self
            .client
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let user: AuthUser = response.json().await?;
        debug!("current-user resolved (user_id={})", user.id);
        Ok(user)
    }
}

/// Strip a trailing slash so endpoint joins stay canonical.
fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Extract the provider's human-readable message from an error body.
///
/// The provider uses `error_description` for token grants and `msg` for
/// the other auth endpoints.
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message"] {
            if let Some(message) = value.get(key).and_then(|message| message.as_str()) {
                return message.to_string();
            }
        }
    }
    format!("auth request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::{HttpIdentityProvider, rejection_message, trim_base_url};
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_joins_are_canonical() {
        let provider =
            HttpIdentityProvider::new("https://project.supabase.co/", "anon");
        assert_eq!(
            provider.endpoint("token?grant_type=password"),
            "https://project.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(trim_base_url("https://a.example".to_string()), "https://a.example");
    }

    #[test]
    fn rejection_message_prefers_provider_fields() {
        assert_eq!(
            rejection_message(400, r#"{"error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            rejection_message(422, r#"{"msg":"User already registered"}"#),
            "User already registered"
        );
        assert_eq!(
            rejection_message(500, "not json"),
            "auth request failed with status 500"
        );
    }
}
