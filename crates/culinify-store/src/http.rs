//! HTTP client for a managed PostgREST-style tabular store.

use crate::error::StoreError;
use crate::RecipeStore;
use async_trait::async_trait;
use culinify_protocol::RecipeRecord;
use log::{debug, info, warn};
use serde::Serialize;

/// Table holding recipe records.
const RECIPES_TABLE: &str = "recipes";

/// Recipe store client speaking the managed store's REST API.
#[derive(Clone)]
pub struct HttpRecipeStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// Row payload for inserts; `id` and `created_at` are store-assigned.
#[derive(Debug, Serialize)]
struct NewRecipeRow<'a> {
    user_id: &'a str,
    recipe: &'a str,
}

impl HttpRecipeStore {
    /// Create a client against the given service url and public key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("recipe store client initialized (base_url={base_url})");
        Self {
            client: reqwest::Client::new(),
            base_url,
            anon_key: anon_key.into(),
        }
    }

    /// Build the REST url for the recipes table.
    fn table_url(&self) -> String {
        format!("{}/rest/v1/{RECIPES_TABLE}", self.base_url)
    }

    /// Convert a non-success store response into a `StoreError`, relaying
    /// the store's own message where it provides one.
    async fn rejection(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => rejection_message(status, &body),
            Err(_) => format!("store request failed with status {status}"),
        };
        warn!("recipe store rejected request (status={status})");
        StoreError::Rejected { status, message }
    }
}

#[async_trait]
impl RecipeStore for HttpRecipeStore {
    async fn insert(&self, user_id: &str, recipe: &str) -> Result<(), StoreError> {
        debug!(
            "inserting recipe record (user_id={}, recipe_len={})",
            user_id,
            recipe.len()
        );
        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(&[NewRecipeRow { user_id, recipe }])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        info!("recipe record inserted (user_id={user_id})");
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<RecipeRecord>, StoreError> {
        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(&[
                ("select", "*"),
                ("user_id", &format!("eq.{user_id}")),
                ("order", "created_at.desc"),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let records: Vec<RecipeRecord> = response.json().await?;
        debug!(
            "recipe records fetched (user_id={}, count={})",
            user_id,
            records.len()
        );
        Ok(records)
    }
}

/// Extract the store's message from an error body.
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|message| message.as_str()) {
            return message.to_string();
        }
    }
    format!("store request failed with status {status}")
}
