use dexdle_domain::common::Timestamp;
use dexdle_domain::entity::Rank;
use dexdle_domain::session::{Session, SessionIdentifier};
use lambars::pipe;

use super::StartGameCommand;
use crate::errors::WorkflowError;
use crate::ports::{Catalog, RandomSource, SessionRepository, WorkflowResult};

// =============================================================================
// Step 1: Load Ranks [IO]
// =============================================================================

fn load_ranks<C: Catalog>(catalog: &C) -> WorkflowResult<Vec<Rank>> {
    Ok(catalog.ranks()?)
}

// =============================================================================
// Step 2: Pick Target [Pure + Random]
// =============================================================================

fn pick_target<G: RandomSource>(random: &G, ranks: &[Rank]) -> WorkflowResult<Rank> {
    if ranks.is_empty() {
        return Err(WorkflowError::EmptyCatalog);
    }
    let index = random.pick_index(ranks.len());
    ranks
        .get(index)
        .copied()
        .ok_or(WorkflowError::EmptyCatalog)
}

// =============================================================================
// Step 3: Create Session [Pure]
// =============================================================================

fn create_session(command: StartGameCommand, target: Rank) -> Session {
    Session::start(
        SessionIdentifier::new(),
        command.player().clone(),
        target,
        Timestamp::now(),
    )
}

// =============================================================================
// Step 4: Save Session [IO]
// =============================================================================

fn save_session<S: SessionRepository>(sessions: &S, session: Session) -> WorkflowResult<Session> {
    sessions.insert(session.clone())?;
    Ok(session)
}

// =============================================================================
// StartGame Workflow
// =============================================================================

/// Opens a session against a uniformly drawn catalog entity.
///
/// Fails with [`WorkflowError::EmptyCatalog`] when there is nothing to draw.
pub fn start_game<'a, C, S, G>(
    catalog: &'a C,
    sessions: &'a S,
    random: &'a G,
) -> impl Fn(StartGameCommand) -> WorkflowResult<Session> + 'a
where
    C: Catalog,
    S: SessionRepository,
    G: RandomSource,
{
    move |command| {
        let (session, candidates) = pipe!(
            load_ranks(catalog),
            |ranks: WorkflowResult<Vec<Rank>>| {
                ranks.and_then(|ranks| Ok((pick_target(random, &ranks)?, ranks.len())))
            },
            |picked: WorkflowResult<(Rank, usize)>| {
                picked.map(|(target, candidates)| (create_session(command, target), candidates))
            },
            |created: WorkflowResult<(Session, usize)>| {
                created.and_then(|(session, candidates)| {
                    Ok((save_session(sessions, session)?, candidates))
                })
            }
        )?;

        tracing::info!(
            session_id = %session.identifier(),
            player_id = %session.player(),
            candidates,
            "game started"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::test_support::{
        FixedRandom, MockCatalog, MockSessionRepository, bulbasaur, pikachu, player, raichu,
    };
    use dexdle_domain::session::SessionStatus;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 25)]
    #[case(2, 26)]
    fn draws_target_by_index(#[case] index: usize, #[case] expected_rank: u32) {
        let catalog = MockCatalog::new(vec![raichu(), pikachu(), bulbasaur()]);
        let sessions = MockSessionRepository::default();
        let random = FixedRandom(index);
        let workflow = start_game(&catalog, &sessions, &random);

        let session = workflow(StartGameCommand::new(player())).unwrap();

        assert_eq!(session.target().value(), expected_rank);
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.attempts(), 0);
        assert_eq!(sessions.get(session.identifier()), Some(session));
    }

    #[rstest]
    fn empty_catalog_fails_without_saving() {
        let catalog = MockCatalog::default();
        let sessions = MockSessionRepository::default();
        let workflow = start_game(&catalog, &sessions, &FixedRandom(0));

        let error = workflow(StartGameCommand::new(player())).unwrap_err();

        assert_eq!(error, WorkflowError::EmptyCatalog);
        assert_eq!(sessions.len(), 0);
    }

    #[rstest]
    fn storage_failure_is_reported() {
        let catalog = MockCatalog::new(vec![pikachu()]);
        let sessions = MockSessionRepository::failing_inserts();
        let workflow = start_game(&catalog, &sessions, &FixedRandom(0));

        let error = workflow(StartGameCommand::new(player())).unwrap_err();

        assert!(matches!(error, WorkflowError::Repository(_)));
    }

    #[rstest]
    fn each_start_creates_a_new_session() {
        let catalog = MockCatalog::new(vec![pikachu()]);
        let sessions = MockSessionRepository::default();
        let workflow = start_game(&catalog, &sessions, &FixedRandom(0));

        let first = workflow(StartGameCommand::new(player())).unwrap();
        let second = workflow(StartGameCommand::new(player())).unwrap();

        assert_ne!(first.identifier(), second.identifier());
        assert_eq!(sessions.len(), 2);
    }
}
