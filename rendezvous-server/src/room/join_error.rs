use crate::store::StoreError;
use rendezvous_core::RoomId;
use thiserror::Error;

/// Why a join could not be decided. In every case nothing was committed.
#[derive(Debug, Error)]
pub enum JoinError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("room '{room_id}' still contended after {attempts} attempts")]
    ConflictExhausted { room_id: RoomId, attempts: u32 },
}
