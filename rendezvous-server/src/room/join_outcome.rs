use rendezvous_core::RegisterResult;

/// Decision reached for one join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A new client was appended and committed.
    Accepted { is_existing_client: bool },
    /// The connection was already a member of the room; nothing was written.
    Rejoined { is_existing_client: bool },
    /// The room is full; nothing was written.
    Rejected { is_existing_client: bool },
}

impl JoinOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, JoinOutcome::Rejected { .. })
    }

    /// Whether another participant was already waiting in the room.
    pub fn is_existing_client(&self) -> bool {
        match *self {
            JoinOutcome::Accepted { is_existing_client }
            | JoinOutcome::Rejoined { is_existing_client }
            | JoinOutcome::Rejected { is_existing_client } => is_existing_client,
        }
    }

    pub fn to_result(&self) -> RegisterResult {
        RegisterResult::new(self.accepted(), self.is_existing_client())
    }
}
