use crate::store::StoreError;
use async_trait::async_trait;
use rendezvous_core::{Connection, ConnectionId, Room, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Rooms,
    Connections,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Room(Room),
    Connection(Connection),
}

impl Item {
    pub fn table(&self) -> Table {
        match self {
            Item::Room(_) => Table::Rooms,
            Item::Connection(_) => Table::Connections,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Item::Room(room) => room.room_id.as_str(),
            Item::Connection(conn) => conn.connection_id.as_str(),
        }
    }
}

/// Condition a stored item must meet for a guarded put to go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Unconditional overwrite.
    None,
    /// No item with the same key may exist yet.
    NotExists,
    /// The stored room must carry exactly this version.
    VersionEquals(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalPut {
    pub item: Item,
    pub precondition: Precondition,
}

impl ConditionalPut {
    pub fn new(item: Item, precondition: Precondition) -> Self {
        Self { item, precondition }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Committed,
    /// At least one precondition did not hold; nothing was written.
    PreconditionFailed,
}

/// Key-addressed storage the room registry runs on.
///
/// `transact_write` is all-or-nothing: either every precondition holds and
/// every item is written, or the store is left untouched.
#[async_trait]
pub trait Store: Send + Sync {
    async fn get_room(&self, room_id: &RoomId) -> Result<Option<Room>, StoreError>;

    async fn get_connection(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<Connection>, StoreError>;

    async fn transact_write(&self, puts: Vec<ConditionalPut>) -> Result<WriteOutcome, StoreError>;
}
