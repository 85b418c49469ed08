//! Recipe store client for Culinify.
//!
//! Wraps the managed tabular store holding the `recipes` table. Records
//! are created by the persistence gateway and read back by the history
//! flow; nothing here updates or deletes them.

mod error;
mod http;

pub use error::StoreError;
pub use http::HttpRecipeStore;

use async_trait::async_trait;
use culinify_protocol::RecipeRecord;

/// Recipe store abstraction used by the gateways and flows.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert one new record owned by `user_id`. Repeated calls with
    /// identical content create distinct records.
    async fn insert(&self, user_id: &str, recipe: &str) -> Result<(), StoreError>;

    /// Fetch every record owned by `user_id`, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<RecipeRecord>, StoreError>;
}
