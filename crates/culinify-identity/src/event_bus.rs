//! Auth-state-change broadcast for interested views.

use culinify_protocol::AuthChange;
use log::debug;
use tokio::sync::broadcast;

/// Broadcast-backed bus carrying auth-state transitions.
///
/// The landing view subscribes to switch between signed-in and signed-out
/// rendering without polling the provider.
#[derive(Clone, Debug)]
pub struct AuthEventBus {
    sender: broadcast::Sender<AuthChange>,
}

impl AuthEventBus {
    /// Create a new bus with the given channel buffer size.
    pub fn new(buffer: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer);
        debug!("auth event bus initialized (buffer={})", buffer);
        Self { sender }
    }

    /// Subscribe to auth-state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.sender.subscribe()
    }

    /// Emit a change to all subscribers. Dropped when nobody listens.
    pub fn emit(&self, change: AuthChange) {
        let _ = self.sender.send(change);
    }
}

impl Default for AuthEventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::AuthEventBus;
    use culinify_protocol::AuthChange;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn subscribers_receive_emitted_changes() {
        let bus = AuthEventBus::new(4);
        let mut receiver = bus.subscribe();
        bus.emit(AuthChange::SignedIn {
            user_id: "u1".to_string(),
        });
        bus.emit(AuthChange::SignedOut);

        assert_eq!(
            receiver.recv().await.expect("first change"),
            AuthChange::SignedIn {
                user_id: "u1".to_string()
            }
        );
        assert_eq!(
            receiver.recv().await.expect("second change"),
            AuthChange::SignedOut
        );
    }

    #[test]
    fn emit_without_subscribers_is_dropped() {
        let bus = AuthEventBus::new(4);
        bus.emit(AuthChange::SignedOut);
    }
}
