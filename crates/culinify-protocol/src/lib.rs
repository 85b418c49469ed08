//! Wire types shared by the Culinify gateways, flows, and service clients.

mod auth;
mod recipe;

pub use auth::{AuthChange, AuthSession, AuthUser};
pub use recipe::RecipeRecord;

use serde::{Deserialize, Serialize};

/// Opaque identity-provider subject id.
pub type UserId = String;

/// Request body accepted by the generate-recipe gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRecipeRequest {
    /// Free-text prompt supplied by the user. Missing on the wire decodes
    /// as empty and is rejected by validation.
    #[serde(default)]
    pub prompt: String,
    /// Subject id of the submitting user. Accepted for the caller's
    /// downstream persistence step; never forwarded upstream.
    #[serde(default, rename = "userId")]
    pub user_id: UserId,
}

/// Success body returned by the generate-recipe gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRecipeResponse {
    /// Generated recipe text, or the fallback literal.
    pub recipe: String,
}

/// Request body accepted by the save-recipe gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveRecipeRequest {
    /// Subject id owning the new record.
    #[serde(default, rename = "userId")]
    pub user_id: UserId,
    /// Recipe text to persist verbatim.
    #[serde(default)]
    pub recipe: String,
}

/// Success body returned by the save-recipe gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveRecipeResponse {
    /// Human-readable acknowledgment.
    pub message: String,
}

/// Error body returned by both gateways.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Static, client-safe error message.
    pub error: String,
}

/// Payload forwarded to the external generation endpoint.
///
/// Only the prompt crosses this boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationPayload {
    pub prompt: String,
}

/// Response body expected from the external generation endpoint.
///
/// The `recipe` field is optional on the wire; callers substitute a
/// fallback when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationReply {
    #[serde(default)]
    pub recipe: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{GenerateRecipeRequest, GenerationReply, SaveRecipeRequest};
    use pretty_assertions::assert_eq;

    #[test]
    fn gateway_requests_use_camel_case_user_id() {
        let request: GenerateRecipeRequest =
            serde_json::from_str(r#"{"prompt":"chicken and rice","userId":"u1"}"#)
                .expect("generate request");
        assert_eq!(request.prompt, "chicken and rice");
        assert_eq!(request.user_id, "u1");

        let request: SaveRecipeRequest =
            serde_json::from_str(r#"{"userId":"u1","recipe":"Chicken Rice Bowl"}"#)
                .expect("save request");
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.recipe, "Chicken Rice Bowl");
    }

    #[test]
    fn generation_reply_tolerates_missing_recipe() {
        let reply: GenerationReply = serde_json::from_str("{}").expect("empty reply");
        assert_eq!(reply.recipe, None);

        let reply: GenerationReply =
            serde_json::from_str(r#"{"recipe":"Chicken Rice Bowl"}"#).expect("reply");
        assert_eq!(reply.recipe, Some("Chicken Rice Bowl".to_string()));
    }
}
