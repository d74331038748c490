use crate::model::client::Client;
use crate::model::ids::{ConnectionId, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hard cap on participants per room.
pub const ROOM_CAPACITY: usize = 2;

/// Whether a room holding `len` clients can take one more.
pub fn has_capacity(len: usize) -> bool {
    len < ROOM_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: RoomId,
    pub clients: Vec<Client>,
    pub created_at: DateTime<Utc>,
    /// Optimistic-concurrency token. `0` means the room has never been
    /// stored; every committed write bumps it by one.
    pub version: u64,
}

impl Room {
    /// The implicit pre-state of a room nobody has joined yet.
    pub fn empty(room_id: RoomId, now: DateTime<Utc>) -> Self {
        Self {
            room_id,
            clients: Vec::new(),
            created_at: now,
            version: 0,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.version > 0
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn is_full(&self) -> bool {
        !has_capacity(self.clients.len())
    }

    pub fn contains_connection(&self, connection_id: &ConnectionId) -> bool {
        self.clients
            .iter()
            .any(|c| &c.connection_id == connection_id)
    }
}
