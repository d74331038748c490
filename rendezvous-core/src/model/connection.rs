use crate::model::ids::{ConnectionId, RoomId};
use serde::{Deserialize, Serialize};

/// Reverse index from a transport connection to the room it last joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub connection_id: ConnectionId,
    pub room_id: RoomId,
}
