use crate::room::{JoinError, JoinOutcome};
use crate::signaling::DeliveryError;
use crate::store::StoreError;
use rendezvous_core::RoomId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("malformed register command: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unsupported command type '{0}'")]
    UnknownCommand(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("room '{room_id}' still contended after {attempts} attempts")]
    ConflictExhausted { room_id: RoomId, attempts: u32 },

    /// The join was decided but its result could not be serialized, so no
    /// push was attempted.
    #[error("join settled as {outcome:?} but the result could not be encoded: {source}")]
    Encode {
        outcome: JoinOutcome,
        #[source]
        source: serde_json::Error,
    },

    /// The join was decided (and committed, if accepted); only the
    /// notification was lost.
    #[error("join settled as {outcome:?} but the result could not be delivered: {source}")]
    Delivery {
        outcome: JoinOutcome,
        #[source]
        source: DeliveryError,
    },
}

impl RegistrationError {
    /// Whether room membership may have changed before the failure.
    ///
    /// Callers seeing `true` should re-query room state instead of
    /// repeating the join.
    pub fn is_committed(&self) -> bool {
        match self {
            RegistrationError::Encode { outcome, .. }
            | RegistrationError::Delivery { outcome, .. } => {
                matches!(outcome, JoinOutcome::Accepted { .. })
            }
            _ => false,
        }
    }
}

impl From<JoinError> for RegistrationError {
    fn from(err: JoinError) -> Self {
        match err {
            JoinError::Store(e) => RegistrationError::Store(e),
            JoinError::ConflictExhausted { room_id, attempts } => {
                RegistrationError::ConflictExhausted { room_id, attempts }
            }
        }
    }
}
