use async_trait::async_trait;
use rendezvous_core::ConnectionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("connection {0} is gone")]
    Gone(ConnectionId),

    #[error("failed to push to connection {connection_id}: {reason}")]
    Failed {
        connection_id: ConnectionId,
        reason: String,
    },
}

/// Out-of-band delivery of a message to an already established connection.
///
/// Implemented by the WebSocket gateway; delivery is best-effort.
#[async_trait]
pub trait PushDelivery: Send + Sync {
    async fn send(&self, connection_id: &ConnectionId, payload: String) -> Result<(), DeliveryError>;
}
