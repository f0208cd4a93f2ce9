use dexdle_domain::session::{PlayerIdentifier, Session};

use crate::ports::{SessionRepository, WorkflowResult};

/// A player's session history, newest first.
pub fn list_sessions<S>(
    sessions: &S,
) -> impl Fn(&PlayerIdentifier) -> WorkflowResult<Vec<Session>> + '_
where
    S: SessionRepository,
{
    move |player| Ok(sessions.list_by_player(player)?)
}
