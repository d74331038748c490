use crate::model::ids::{ClientId, RoomId};
use serde::{Deserialize, Serialize};

/// Inbound join request as carried over the signaling channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCommand {
    #[serde(rename = "type")]
    pub kind: String,
    pub room_id: RoomId,
    pub client_id: ClientId,
}

impl RegisterCommand {
    pub const TYPE: &'static str = "register";

    pub fn new(room_id: impl Into<RoomId>, client_id: impl Into<ClientId>) -> Self {
        Self {
            kind: Self::TYPE.to_owned(),
            room_id: room_id.into(),
            client_id: client_id.into(),
        }
    }

    pub fn is_register(&self) -> bool {
        self.kind == Self::TYPE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Accept,
    Reject,
}

/// Outcome pushed back to the requesting connection.
///
/// `isExistClient` and `isExistUser` always carry the same value; older
/// clients read one or the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    #[serde(rename = "isExistClient")]
    pub is_exist_client: bool,
    #[serde(rename = "isExistUser")]
    pub is_exist_user: bool,
}

impl RegisterResult {
    pub fn new(accepted: bool, is_existing_client: bool) -> Self {
        Self {
            kind: if accepted {
                ResultKind::Accept
            } else {
                ResultKind::Reject
            },
            is_exist_client: is_existing_client,
            is_exist_user: is_existing_client,
        }
    }
}
