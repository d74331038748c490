use crate::signaling::{DeliveryError, PushDelivery};
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use rendezvous_core::ConnectionId;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

struct SignalingInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Registry of live WebSocket connections, addressable by connection id.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
            }),
        }
    }

    pub fn add_connection(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(connection_id, tx);
    }

    pub fn remove_connection(&self, connection_id: &ConnectionId) {
        self.inner.connections.remove(connection_id);
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushDelivery for SignalingService {
    async fn send(&self, connection_id: &ConnectionId, payload: String) -> Result<(), DeliveryError> {
        let Some(conn) = self.inner.connections.get(connection_id) else {
            warn!(
                "Attempted to push to disconnected connection {:?}",
                connection_id
            );
            return Err(DeliveryError::Gone(connection_id.clone()));
        };

        conn.send(Message::Text(payload.into()))
            .map_err(|e| DeliveryError::Failed {
                connection_id: connection_id.clone(),
                reason: e.to_string(),
            })
    }
}
