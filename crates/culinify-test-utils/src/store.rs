use async_trait::async_trait;
use chrono::Utc;
use culinify_protocol::RecipeRecord;
use culinify_store::{RecipeStore, StoreError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store recording inserts and serving them (plus seeded
/// records) back.
///
/// `list_for_user` mimics the managed store: owner-filtered, ordered by
/// `created_at` descending with insertion order breaking ties.
#[derive(Default)]
pub struct RecordingStore {
    records: Mutex<Vec<RecipeRecord>>,
    inserted: Mutex<Vec<(String, String)>>,
    list_calls: AtomicUsize,
}

impl RecordingStore {
    /// Seed records as if previously inserted.
    pub fn seed(&self, records: Vec<RecipeRecord>) {
        self.records.lock().extend(records);
    }

    /// Inserted `(user_id, recipe)` pairs, in order. Seeded records are
    /// not included.
    pub fn rows(&self) -> Vec<(String, String)> {
        self.inserted.lock().clone()
    }

    /// Number of `list_for_user` calls issued.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeStore for RecordingStore {
    async fn insert(&self, user_id: &str, recipe: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock();
        let id = records.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        records.push(RecipeRecord {
            id,
            user_id: user_id.to_string(),
            recipe: recipe.to_string(),
            created_at: Utc::now(),
        });
        self.inserted
            .lock()
            .push((user_id.to_string(), recipe.to_string()));
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<RecipeRecord>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut records: Vec<RecipeRecord> = self
            .records
            .lock()
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

/// Store failing every call with a fixed message.
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RecipeStore for FailingStore {
    async fn insert(&self, _user_id: &str, _recipe: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected {
            status: 500,
            message: self.message.clone(),
        })
    }

    async fn list_for_user(&self, _user_id: &str) -> Result<Vec<RecipeRecord>, StoreError> {
        Err(StoreError::Rejected {
            status: 500,
            message: self.message.clone(),
        })
    }
}
