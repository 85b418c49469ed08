//! History-screen orchestration.

use culinify_identity::IdentityProvider;
use culinify_protocol::{AuthSession, RecipeRecord};
use culinify_store::RecipeStore;
use log::{debug, warn};
use std::sync::Arc;

/// Render state for the history screen.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    /// No session; the caller navigates to sign-in. No query was issued.
    Redirected,
    /// The owner has no records; render the call-to-action.
    Empty,
    /// One or more records, newest first.
    Populated {
        entries: Vec<HistoryEntry>,
        summary: String,
    },
}

/// One rendered history item.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The record as stored.
    pub record: RecipeRecord,
    /// Human-readable creation timestamp.
    pub created_label: String,
}

/// Loads the owner's records for the history screen.
///
/// The session is verified with the provider before any store query, so a
/// stale token redirects instead of leaking an empty library.
pub struct HistoryFlow {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn RecipeStore>,
}

impl HistoryFlow {
    /// Create a flow over the given identity provider and store.
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn RecipeStore>) -> Self {
        Self { identity, store }
    }

    /// Resolve the session and load the owner's full history.
    ///
    /// A store failure is logged and rendered as an empty library; the
    /// screen does not distinguish it from having no records.
    pub async fn load(&self, session: Option<&AuthSession>) -> HistoryState {
        let Some(session) = session else {
            debug!("history load without session, redirecting");
            return HistoryState::Redirected;
        };
        let user = match self.identity.current_user(session).await {
            Ok(user) => user,
            Err(err) => {
                warn!("history session check failed: {err}");
                return HistoryState::Redirected;
            }
        };

        let records = match self.store.list_for_user(&user.id).await {
            Ok(records) => records,
            Err(err) => {
                warn!("history query failed (user_id={}): {err}", user.id);
                return HistoryState::Empty;
            }
        };
        if records.is_empty() {
            return HistoryState::Empty;
        }

        debug!(
            "history loaded (user_id={}, count={})",
            user.id,
            records.len()
        );
        let summary = library_summary(records.len());
        let entries = records
            .into_iter()
            .map(|record| HistoryEntry {
                created_label: format_created_at(&record),
                record,
            })
            .collect();
        HistoryState::Populated { entries, summary }
    }
}

/// Format a record's creation time the way the history screen shows it.
fn format_created_at(record: &RecipeRecord) -> String {
    record.created_at.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// Count line shown above a populated library.
fn library_summary(count: usize) -> String {
    if count == 1 {
        "1 recipe in your library".to_string()
    } else {
        format!("{count} recipes in your library")
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryFlow, HistoryState, format_created_at, library_summary};
    use chrono::{TimeZone, Utc};
    use culinify_protocol::RecipeRecord;
    use culinify_test_utils::{session_for, RecordingStore, FailingStore, StubIdentity};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn record(id: i64, user_id: &str, ts: &str) -> RecipeRecord {
        RecipeRecord {
            id,
            user_id: user_id.to_string(),
            recipe: format!("recipe {id}"),
            created_at: ts.parse().expect("timestamp"),
        }
    }

    #[tokio::test]
    async fn missing_session_redirects_without_querying() {
        let store = Arc::new(RecordingStore::default());
        let flow = HistoryFlow::new(Arc::new(StubIdentity::with_user("u1")), store.clone());
        assert_eq!(flow.load(None).await, HistoryState::Redirected);
        assert_eq!(store.list_calls(), 0);
    }

    #[tokio::test]
    async fn rejected_session_redirects_without_querying() {
        let store = Arc::new(RecordingStore::default());
        let flow = HistoryFlow::new(
            Arc::new(StubIdentity::rejecting("JWT expired")),
            store.clone(),
        );
        let state = flow.load(Some(&session_for("u1"))).await;
        assert_eq!(state, HistoryState::Redirected);
        assert_eq!(store.list_calls(), 0);
    }

    #[tokio::test]
    async fn no_records_renders_empty() {
        let flow = HistoryFlow::new(
            Arc::new(StubIdentity::with_user("u1")),
            Arc::new(RecordingStore::default()),
        );
        assert_eq!(flow.load(Some(&session_for("u1"))).await, HistoryState::Empty);
    }

    #[tokio::test]
    async fn store_failure_renders_empty() {
        let flow = HistoryFlow::new(
            Arc::new(StubIdentity::with_user("u1")),
            Arc::new(FailingStore::new("connection reset")),
        );
        assert_eq!(flow.load(Some(&session_for("u1"))).await, HistoryState::Empty);
    }

    #[tokio::test]
    async fn populated_history_keeps_store_order_and_labels() {
        let store = Arc::new(RecordingStore::default());
        store.seed(vec![
            record(2, "u1", "2025-07-02T18:05:00Z"),
            record(1, "u1", "2025-07-01T10:30:00Z"),
        ]);
        let flow = HistoryFlow::new(Arc::new(StubIdentity::with_user("u1")), store);

        let HistoryState::Populated { entries, summary } =
            flow.load(Some(&session_for("u1"))).await
        else {
            panic!("expected populated history");
        };
        assert_eq!(summary, "2 recipes in your library");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].record.id, 2);
        assert_eq!(entries[1].record.id, 1);
        assert!(entries[0].record.created_at >= entries[1].record.created_at);
        assert_eq!(entries[1].created_label, "July 1, 2025, 10:30 AM");
    }

    #[test]
    fn created_label_matches_screen_format() {
        let record = record(1, "u1", "2025-12-09T09:05:00Z");
        assert_eq!(format_created_at(&record), "December 9, 2025, 09:05 AM");
    }

    #[test]
    fn library_summary_pluralizes() {
        assert_eq!(library_summary(1), "1 recipe in your library");
        assert_eq!(library_summary(3), "3 recipes in your library");
    }

    #[tokio::test]
    async fn query_is_scoped_to_the_owner() {
        let store = Arc::new(RecordingStore::default());
        store.seed(vec![record(1, "u1", "2025-07-01T10:30:00Z")]);
        let flow = HistoryFlow::new(Arc::new(StubIdentity::with_user("u2")), store.clone());
        assert_eq!(flow.load(Some(&session_for("u2"))).await, HistoryState::Empty);
        assert_eq!(store.list_calls(), 1);
    }

    #[test]
    fn record_helper_parses_timestamps() {
        let record = record(1, "u1", "2025-07-01T10:30:00Z");
        let expected = Utc.with_ymd_and_hms(2025, 7, 1, 10, 30, 0).unwrap();
        assert_eq!(record.created_at, expected);
    }
}
