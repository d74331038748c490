use async_trait::async_trait;
use rendezvous_core::{ConnectionId, RegisterResult};
use rendezvous_server::{DeliveryError, PushDelivery};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

#[derive(Debug, Clone)]
pub struct PushedMessage {
    pub connection_id: ConnectionId,
    pub payload: String,
}

impl PushedMessage {
    pub fn result(&self) -> RegisterResult {
        serde_json::from_str(&self.payload).expect("pushed payload is not a RegisterResult")
    }
}

/// Mock PushDelivery that captures everything pushed.
#[derive(Clone)]
pub struct MockPushDelivery {
    /// Channel to stream captured pushes.
    tx: mpsc::UnboundedSender<PushedMessage>,
    /// All captured pushes (for verification).
    pushed: Arc<Mutex<Vec<PushedMessage>>>,
}

impl MockPushDelivery {
    /// Create a new MockPushDelivery and its receiver channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PushedMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let push = Self {
            tx,
            pushed: Arc::new(Mutex::new(Vec::new())),
        };
        (push, rx)
    }

    /// Results pushed to a specific connection, oldest first.
    pub async fn results_for(&self, connection_id: &ConnectionId) -> Vec<RegisterResult> {
        self.pushed
            .lock()
            .await
            .iter()
            .filter(|m| &m.connection_id == connection_id)
            .map(PushedMessage::result)
            .collect()
    }

    pub async fn count(&self) -> usize {
        self.pushed.lock().await.len()
    }
}

#[async_trait]
impl PushDelivery for MockPushDelivery {
    async fn send(&self, connection_id: &ConnectionId, payload: String) -> Result<(), DeliveryError> {
        tracing::debug!("[MockPush] send to {}", connection_id);

        let msg = PushedMessage {
            connection_id: connection_id.clone(),
            payload,
        };

        self.pushed.lock().await.push(msg.clone());
        let _ = self.tx.send(msg);
        Ok(())
    }
}
