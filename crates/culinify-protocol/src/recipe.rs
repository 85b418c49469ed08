//! Persisted recipe record model.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner-scoped, immutable recipe entry as stored in the `recipes` table.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeRecord {
    /// Store-assigned identifier, unique and monotonic-ish by insertion.
    pub id: i64,
    /// Subject id of the owning user.
    pub user_id: UserId,
    /// Unstructured recipe text.
    pub recipe: String,
    /// Store-assigned insertion timestamp.
    pub created_at: DateTime<Utc>,
}
