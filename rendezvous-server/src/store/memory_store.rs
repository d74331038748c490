use crate::store::{ConditionalPut, Item, Precondition, Store, StoreError, Table, WriteOutcome};
use async_trait::async_trait;
use dashmap::DashMap;
use rendezvous_core::{Connection, ConnectionId, Room, RoomId};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::debug;

struct MemoryStoreInner {
    rooms: DashMap<RoomId, Room>,
    connections: DashMap<ConnectionId, Connection>,
    /// Serializes transactions. Reads never take it.
    commit_lock: Mutex<()>,
}

/// In-process [`Store`] backed by two concurrent maps.
///
/// Cloning is cheap and every clone sees the same tables.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<MemoryStoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryStoreInner {
                rooms: DashMap::new(),
                connections: DashMap::new(),
                commit_lock: Mutex::new(()),
            }),
        }
    }

    pub fn room_count(&self) -> usize {
        self.inner.rooms.len()
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.inner.rooms.iter().map(|e| e.value().clone()).collect()
    }

    pub fn connections(&self) -> Vec<Connection> {
        self.inner
            .connections
            .iter()
            .map(|e| e.value().clone())
            .collect()
    }

    fn check(&self, put: &ConditionalPut) -> Result<bool, StoreError> {
        match (&put.item, put.precondition) {
            (_, Precondition::None) => Ok(true),
            (Item::Room(room), Precondition::NotExists) => {
                Ok(!self.inner.rooms.contains_key(&room.room_id))
            }
            (Item::Connection(conn), Precondition::NotExists) => {
                Ok(!self.inner.connections.contains_key(&conn.connection_id))
            }
            (Item::Room(room), Precondition::VersionEquals(expected)) => Ok(self
                .inner
                .rooms
                .get(&room.room_id)
                .is_some_and(|stored| stored.version == expected)),
            (Item::Connection(conn), Precondition::VersionEquals(_)) => {
                Err(StoreError::InvalidRequest(format!(
                    "connection {} has no version to compare",
                    conn.connection_id
                )))
            }
        }
    }

    fn apply(&self, item: Item) {
        match item {
            Item::Room(room) => {
                self.inner.rooms.insert(room.room_id.clone(), room);
            }
            Item::Connection(conn) => {
                self.inner
                    .connections
                    .insert(conn.connection_id.clone(), conn);
            }
        }
    }
}

fn ensure_unique_keys(puts: &[ConditionalPut]) -> Result<(), StoreError> {
    let mut keys = HashSet::new();
    for put in puts {
        if !keys.insert((put.item.table(), put.item.key())) {
            return Err(StoreError::InvalidRequest(format!(
                "duplicate key '{}' in transaction",
                put.item.key()
            )));
        }
    }
    Ok(())
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_room(&self, room_id: &RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.inner.rooms.get(room_id).map(|r| r.value().clone()))
    }

    async fn get_connection(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<Connection>, StoreError> {
        Ok(self
            .inner
            .connections
            .get(connection_id)
            .map(|c| c.value().clone()))
    }

    async fn transact_write(&self, puts: Vec<ConditionalPut>) -> Result<WriteOutcome, StoreError> {
        if puts.is_empty() {
            return Err(StoreError::InvalidRequest("empty transaction".to_owned()));
        }

        ensure_unique_keys(&puts)?;

        let _guard = self
            .inner
            .commit_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("commit lock poisoned".to_owned()))?;

        for put in &puts {
            if !self.check(put)? {
                debug!(
                    "Precondition {:?} failed for {:?} {:?}",
                    put.precondition,
                    put.item.table(),
                    put.item.key()
                );
                return Ok(WriteOutcome::PreconditionFailed);
            }
        }

        // Rooms go in before connections so a reader that finds a
        // connection always finds its room already updated.
        let (rooms, connections): (Vec<_>, Vec<_>) = puts
            .into_iter()
            .map(|p| p.item)
            .partition(|item| item.table() == Table::Rooms);
        for item in rooms.into_iter().chain(connections) {
            self.apply(item);
        }

        Ok(WriteOutcome::Committed)
    }
}
