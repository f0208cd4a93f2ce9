use thiserror::Error;

use super::{SessionIdentifier, SessionStatus};
use crate::entity::Rank;

/// Rule violations raised by the session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session already finished and accepts no more guesses.
    #[error("session {session} is {status} and accepts no more guesses")]
    NotActive {
        session: SessionIdentifier,
        status: SessionStatus,
    },
    /// The entity passed as target is not the one the session was opened with.
    #[error("session targets {expected} but was evaluated against {actual}")]
    TargetMismatch { expected: Rank, actual: Rank },
}
