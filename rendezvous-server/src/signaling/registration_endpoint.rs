use crate::room::{JoinOutcome, RoomRegistry};
use crate::signaling::{DeliveryError, PushDelivery, RegistrationError};
use chrono::{DateTime, Utc};
use rendezvous_core::{ConnectionId, RegisterCommand};
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// How many times a result push is tried before giving up. The join
    /// itself is never repeated.
    pub delivery_attempts: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            delivery_attempts: 1,
        }
    }
}

/// Per-request entry point: decode, join, push the result back.
#[derive(Clone)]
pub struct RegistrationEndpoint {
    registry: RoomRegistry,
    push: Arc<dyn PushDelivery>,
    config: EndpointConfig,
}

impl RegistrationEndpoint {
    pub fn new(registry: RoomRegistry, push: Arc<dyn PushDelivery>, config: EndpointConfig) -> Self {
        Self {
            registry,
            push,
            config,
        }
    }

    pub async fn handle(
        &self,
        connection_id: &ConnectionId,
        payload: &str,
        now: DateTime<Utc>,
    ) -> Result<JoinOutcome, RegistrationError> {
        debug!("{:?} {}", connection_id, payload);

        let cmd: RegisterCommand = serde_json::from_str(payload)?;
        if !cmd.is_register() {
            return Err(RegistrationError::UnknownCommand(cmd.kind));
        }

        let outcome = self
            .registry
            .join(&cmd.room_id, &cmd.client_id, connection_id, now)
            .await?;

        let body = serde_json::to_string(&outcome.to_result())
            .map_err(|source| RegistrationError::Encode { outcome, source })?;

        self.deliver(connection_id, body)
            .await
            .map_err(|source| {
                error!(
                    "Join of room {:?} by {:?} settled as {:?} but delivery failed: {}",
                    cmd.room_id, connection_id, outcome, source
                );
                RegistrationError::Delivery { outcome, source }
            })?;

        Ok(outcome)
    }

    async fn deliver(&self, connection_id: &ConnectionId, body: String) -> Result<(), DeliveryError> {
        let attempts = self.config.delivery_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.push.send(connection_id, body.clone()).await {
                Ok(()) => return Ok(()),
                Err(e @ DeliveryError::Gone(_)) => return Err(e),
                Err(e) if attempt >= attempts => return Err(e),
                Err(e) => {
                    warn!(
                        "Push to {:?} failed (attempt {}/{}): {}",
                        connection_id, attempt, attempts, e
                    );
                    attempt += 1;
                }
            }
        }
    }
}
