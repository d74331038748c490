use crate::model::ids::{ClientId, ConnectionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership record embedded in a [`Room`](crate::Room).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub connection_id: ConnectionId,
    /// Caller-supplied identity. Not required to be unique.
    pub client_id: ClientId,
    pub joined_at: DateTime<Utc>,
}
