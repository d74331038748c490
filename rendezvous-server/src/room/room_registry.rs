use crate::room::{JoinError, JoinOutcome, RegistryConfig};
use crate::store::{ConditionalPut, Item, Precondition, Store, WriteOutcome};
use chrono::{DateTime, Utc};
use rendezvous_core::{Client, ClientId, Connection, ConnectionId, Room, RoomId};
use std::sync::Arc;
use tracing::{debug, info, warn};

enum JoinPlan {
    /// Nothing to write; the outcome follows from the read alone.
    Decided(JoinOutcome),
    Commit {
        puts: Vec<ConditionalPut>,
        outcome: JoinOutcome,
    },
}

/// Owns the room-join protocol: read membership, decide, commit with a
/// version guard, retry on conflict.
#[derive(Clone)]
pub struct RoomRegistry {
    store: Arc<dyn Store>,
    config: RegistryConfig,
}

impl RoomRegistry {
    pub fn new(store: Arc<dyn Store>, config: RegistryConfig) -> Self {
        Self { store, config }
    }

    pub async fn join(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        connection_id: &ConnectionId,
        now: DateTime<Utc>,
    ) -> Result<JoinOutcome, JoinError> {
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let room = self
                .store
                .get_room(room_id)
                .await?
                .unwrap_or_else(|| Room::empty(room_id.clone(), now));

            let indexed_room = if room.contains_connection(connection_id) {
                self.store
                    .get_connection(connection_id)
                    .await?
                    .map(|c| c.room_id)
            } else {
                None
            };

            let plan = plan_join(room, indexed_room.as_ref(), client_id, connection_id, now);
            let (puts, outcome) = match plan {
                JoinPlan::Decided(outcome) => {
                    info!(
                        "Room {:?}: {:?} for connection {:?} (no write)",
                        room_id, outcome, connection_id
                    );
                    return Ok(outcome);
                }
                JoinPlan::Commit { puts, outcome } => (puts, outcome),
            };

            match self.store.transact_write(puts).await? {
                WriteOutcome::Committed => {
                    info!(
                        "Room {:?}: {:?} for connection {:?} (attempt {})",
                        room_id, outcome, connection_id, attempt
                    );
                    return Ok(outcome);
                }
                WriteOutcome::PreconditionFailed => {
                    debug!(
                        "Room {:?} changed under connection {:?} (attempt {}/{})",
                        room_id, connection_id, attempt, max_attempts
                    );
                    if attempt < max_attempts {
                        tokio::time::sleep(self.config.backoff(attempt)).await;
                    }
                }
            }
        }

        warn!(
            "Giving up join of room {:?} for connection {:?} after {} attempts",
            room_id, connection_id, max_attempts
        );
        Err(JoinError::ConflictExhausted {
            room_id: room_id.clone(),
            attempts: max_attempts,
        })
    }
}

/// `indexed_room` is the room the connection's reverse index currently
/// points at; it is only consulted for connections already in `room`.
fn plan_join(
    mut room: Room,
    indexed_room: Option<&RoomId>,
    client_id: &ClientId,
    connection_id: &ConnectionId,
    now: DateTime<Utc>,
) -> JoinPlan {
    if room.contains_connection(connection_id) {
        let outcome = JoinOutcome::Rejoined {
            is_existing_client: room.len() > 1,
        };
        if indexed_room == Some(&room.room_id) {
            return JoinPlan::Decided(outcome);
        }

        // The connection joined another room since; point the index back
        // here. The room is rewritten as-is, only to guard on its version.
        let precondition = Precondition::VersionEquals(room.version);
        let conn = Connection {
            connection_id: connection_id.clone(),
            room_id: room.room_id.clone(),
        };
        return JoinPlan::Commit {
            puts: vec![
                ConditionalPut::new(Item::Room(room), precondition),
                ConditionalPut::new(Item::Connection(conn), Precondition::None),
            ],
            outcome,
        };
    }

    if room.is_full() {
        return JoinPlan::Decided(JoinOutcome::Rejected {
            is_existing_client: !room.is_empty(),
        });
    }

    let outcome = JoinOutcome::Accepted {
        is_existing_client: room.len() == 1,
    };

    let precondition = if room.is_persisted() {
        Precondition::VersionEquals(room.version)
    } else {
        Precondition::NotExists
    };

    room.version += 1;
    room.clients.push(Client {
        connection_id: connection_id.clone(),
        client_id: client_id.clone(),
        joined_at: now,
    });
    let conn = Connection {
        connection_id: connection_id.clone(),
        room_id: room.room_id.clone(),
    };

    JoinPlan::Commit {
        puts: vec![
            ConditionalPut::new(Item::Room(room), precondition),
            ConditionalPut::new(Item::Connection(conn), Precondition::None),
        ],
        outcome,
    }
}
