//! Session and user types read from the identity provider.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the identity provider.
///
/// The provider owns the full identity object; this system only reads the
/// subject id and, where present, the email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    /// Opaque subject id.
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// Active session handle for an authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    /// Bearer token for authenticated provider calls.
    pub access_token: String,
    /// User the session belongs to.
    pub user: AuthUser,
}

/// Auth-state transition emitted to subscribers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AuthChange {
    /// A session became active.
    SignedIn { user_id: UserId },
    /// The active session ended.
    SignedOut,
}

#[cfg(test)]
mod tests {
    use super::{AuthChange, AuthUser};
    use pretty_assertions::assert_eq;

    #[test]
    fn auth_user_tolerates_missing_email() {
        let user: AuthUser = serde_json::from_str(r#"{"id":"u1"}"#).expect("user");
        assert_eq!(user.id, "u1");
        assert_eq!(user.email, None);
    }

    #[test]
    fn auth_change_serializes_tagged() {
        let change = AuthChange::SignedIn {
            user_id: "u1".to_string(),
        };
        let encoded = serde_json::to_value(&change).expect("encode");
        assert_eq!(encoded["type"], "signed_in");
        assert_eq!(encoded["user_id"], "u1");
    }
}
