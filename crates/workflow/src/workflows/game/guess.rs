use dexdle_domain::common::Timestamp;
use dexdle_domain::comparison::GuessFeedback;
use dexdle_domain::entity::{Entity, Rank};
use dexdle_domain::session::{PlayerIdentifier, Session};
use dexdle_domain::settings::MaxAttempts;
use dexdle_domain::stats::GameResult;
use lambars::pipe;

use super::GuessCommand;
use crate::errors::WorkflowError;
use crate::ports::{Catalog, PlayerStatsRepository, SessionRepository, WorkflowResult};
use crate::workflows::stats::record_result;

// =============================================================================
// GuessOutcome
// =============================================================================

/// What the player learns from one accepted guess.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    /// The session after the guess.
    pub session: Session,
    pub feedback: GuessFeedback,
    /// The target, revealed once the session has ended.
    pub answer: Option<Entity>,
}

// =============================================================================
// Step 1: Ensure Active [Pure]
// =============================================================================

fn ensure_active(session: &Session) -> WorkflowResult<()> {
    if session.is_active() {
        Ok(())
    } else {
        Err(WorkflowError::session_not_found(session.identifier()))
    }
}

// =============================================================================
// Step 2: Resolve Guessed Entity [IO]
// =============================================================================

fn resolve_entity<C: Catalog>(catalog: &C, name: &str) -> WorkflowResult<Entity> {
    let name = name.trim();
    if name.is_empty() {
        return Err(WorkflowError::entity_not_found(name));
    }
    catalog
        .find_by_name(name)?
        .ok_or_else(|| WorkflowError::entity_not_found(name))
}

// =============================================================================
// Step 3: Load Target [IO]
// =============================================================================

fn load_target<C: Catalog>(catalog: &C, rank: Rank) -> WorkflowResult<Entity> {
    catalog
        .find_by_rank(rank)?
        .ok_or(WorkflowError::TargetMissing { rank: rank.value() })
}

// =============================================================================
// Step 4: Load Budget [IO]
// =============================================================================

fn load_budget<P: PlayerStatsRepository>(
    stats: &P,
    player: &PlayerIdentifier,
) -> WorkflowResult<MaxAttempts> {
    Ok(stats
        .find(player)?
        .map_or_else(MaxAttempts::default, |row| row.max_attempts()))
}

// =============================================================================
// Step 5: Score Guess [Pure]
// =============================================================================

struct GuessContext {
    guessed: Entity,
    target: Entity,
    budget: MaxAttempts,
}

fn score_guess(
    current: &Session,
    context: GuessContext,
    now: Timestamp,
) -> WorkflowResult<(GuessOutcome, Option<GameResult>)> {
    let evaluation = current.submit_guess(&context.guessed, &context.target, context.budget, now)?;
    let answer = evaluation.completed.map(|_| context.target);
    Ok((
        GuessOutcome {
            session: evaluation.session,
            feedback: evaluation.feedback,
            answer,
        },
        evaluation.completed,
    ))
}

// =============================================================================
// Step 6: Record Finished Game [IO]
// =============================================================================

fn record_finished<P: PlayerStatsRepository>(
    stats: &P,
    outcome: GuessOutcome,
    completed: Option<GameResult>,
) -> WorkflowResult<(Session, GuessOutcome)> {
    if let Some(result) = completed {
        record_result(stats, outcome.session.player(), result, outcome.session.updated_at())?;
    }
    Ok((outcome.session.clone(), outcome))
}

// =============================================================================
// Guess Workflow
// =============================================================================

/// Scores a guess and advances the session atomically.
///
/// The whole read-modify-write runs inside the session store's per-session
/// lock, and a finished game is recorded in the stats store before the lock
/// is released. The clock is read once the lock is held, so commits on one
/// session carry non-decreasing `updated_at` values. Any error leaves both
/// stores untouched.
///
/// Session lookup comes before name resolution, so an unknown session with
/// an unknown name reports [`WorkflowError::SessionNotFound`].
pub fn guess<'a, C, S, P>(
    catalog: &'a C,
    sessions: &'a S,
    stats: &'a P,
) -> impl Fn(GuessCommand) -> WorkflowResult<GuessOutcome> + 'a
where
    C: Catalog,
    S: SessionRepository,
    P: PlayerStatsRepository,
{
    move |command| {
        let session_id = command.session();

        let outcome = sessions.update(
            session_id,
            |current| -> WorkflowResult<(Session, GuessOutcome)> {
                let now = Timestamp::now();
                pipe!(
                    ensure_active(current),
                    |active: WorkflowResult<()>| {
                        active.and_then(|()| resolve_entity(catalog, command.entity_name()))
                    },
                    |guessed: WorkflowResult<Entity>| {
                        guessed.and_then(|guessed| {
                            Ok(GuessContext {
                                guessed,
                                target: load_target(catalog, current.target())?,
                                budget: load_budget(stats, current.player())?,
                            })
                        })
                    },
                    |context: WorkflowResult<GuessContext>| {
                        context.and_then(|context| score_guess(current, context, now))
                    },
                    |scored: WorkflowResult<(GuessOutcome, Option<GameResult>)>| {
                        scored.and_then(|(outcome, completed)| {
                            record_finished(stats, outcome, completed)
                        })
                    }
                )
            },
        )?;

        let outcome = outcome.ok_or_else(|| WorkflowError::session_not_found(session_id))?;

        tracing::debug!(
            session_id = %session_id,
            guessed = %outcome.feedback.name,
            attempts = outcome.session.attempts(),
            matched_fields = outcome.feedback.verdicts.matched_fields(),
            "guess scored"
        );
        if outcome.session.status().is_terminal() {
            tracing::info!(
                session_id = %session_id,
                player_id = %outcome.session.player(),
                status = %outcome.session.status(),
                attempts = outcome.session.attempts(),
                "game finished"
            );
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::test_support::{
        MockCatalog, MockSessionRepository, MockStatsRepository, bulbasaur, pikachu, player,
        raichu,
    };
    use dexdle_domain::comparison::{ExactVerdict, OrderedVerdict, SetVerdict};
    use dexdle_domain::session::{SessionIdentifier, SessionStatus};
    use dexdle_domain::stats::PlayerStats;
    use rstest::{fixture, rstest};

    struct Harness {
        catalog: MockCatalog,
        sessions: MockSessionRepository,
        stats: MockStatsRepository,
        session: SessionIdentifier,
    }

    impl Harness {
        fn with_stats(stats: MockStatsRepository) -> Self {
            Self::build(MockSessionRepository::default(), stats)
        }

        fn build(sessions: MockSessionRepository, stats: MockStatsRepository) -> Self {
            let catalog = MockCatalog::new(vec![bulbasaur(), pikachu(), raichu()]);
            let session = Session::start(
                SessionIdentifier::new(),
                player(),
                pikachu().rank(),
                Timestamp::now(),
            );
            let identifier = session.identifier();
            sessions.insert(session).unwrap();
            Self {
                catalog,
                sessions,
                stats,
                session: identifier,
            }
        }

        fn guess(&self, name: &str) -> WorkflowResult<GuessOutcome> {
            guess(&self.catalog, &self.sessions, &self.stats)(GuessCommand::new(
                self.session,
                name,
            ))
        }

        fn stored(&self) -> Session {
            self.sessions.get(self.session).unwrap()
        }
    }

    #[fixture]
    fn harness() -> Harness {
        Harness::with_stats(MockStatsRepository::default())
    }

    fn budget_of(max_attempts: i64) -> MockStatsRepository {
        let row = PlayerStats::new(player(), Timestamp::now())
            .with_max_attempts(MaxAttempts::new(max_attempts).unwrap(), Timestamp::now());
        MockStatsRepository::with_row(row)
    }

    #[rstest]
    fn raichu_for_pikachu_reports_every_field(harness: Harness) {
        let outcome = harness.guess("Raichu").unwrap();
        let verdicts = outcome.feedback.verdicts;

        assert!(!verdicts.name_match);
        assert_eq!(verdicts.rank, OrderedVerdict::Lower);
        assert_eq!(verdicts.categories, SetVerdict::Match);
        assert_eq!(verdicts.size, OrderedVerdict::Lower);
        assert_eq!(verdicts.mass, OrderedVerdict::Lower);
        assert_eq!(verdicts.generation, ExactVerdict::Match);
        assert_eq!(verdicts.depth, ExactVerdict::Match);
        assert_eq!(outcome.session.attempts(), 1);
        assert_eq!(outcome.session.status(), SessionStatus::Active);
        assert_eq!(outcome.answer, None);
    }

    #[rstest]
    fn lower_rank_points_higher(harness: Harness) {
        let outcome = harness.guess("Bulbasaur").unwrap();
        assert_eq!(outcome.feedback.verdicts.rank, OrderedVerdict::Higher);
        assert_eq!(outcome.feedback.verdicts.categories, SetVerdict::Mismatch);
    }

    #[rstest]
    fn correct_guess_wins_and_records_once(harness: Harness) {
        harness.guess("Raichu").unwrap();
        let outcome = harness.guess("Pikachu").unwrap();

        assert_eq!(outcome.session.status(), SessionStatus::Won);
        assert_eq!(outcome.session.attempts(), 2);
        assert_eq!(outcome.answer, Some(pikachu()));

        let row = harness.stats.get(&player()).unwrap();
        assert_eq!(row.total_games(), 1);
        assert_eq!(row.cleared_games(), 1);
        assert_eq!(row.best_attempts(), Some(2));
        assert_eq!(harness.stats.upsert_count(), 1);
    }

    #[rstest]
    fn secondary_name_resolves_ignoring_case(harness: Harness) {
        let outcome = harness.guess("  PIKACHU ").unwrap();
        assert_eq!(outcome.session.status(), SessionStatus::Won);
    }

    #[rstest]
    fn budget_exhaustion_loses() {
        let harness = Harness::with_stats(budget_of(3));
        harness.guess("Raichu").unwrap();
        harness.guess("Bulbasaur").unwrap();
        let outcome = harness.guess("Raichu").unwrap();

        assert_eq!(outcome.session.status(), SessionStatus::Lost);
        assert_eq!(outcome.answer, Some(pikachu()));
        let row = harness.stats.get(&player()).unwrap();
        assert_eq!(row.total_games(), 1);
        assert_eq!(row.cleared_games(), 0);
        assert_eq!(row.max_attempts().value(), 3);
    }

    #[rstest]
    fn default_budget_applies_without_stats_row(harness: Harness) {
        for _ in 0..7 {
            let outcome = harness.guess("Raichu").unwrap();
            assert_eq!(outcome.session.status(), SessionStatus::Active);
        }
        let outcome = harness.guess("Raichu").unwrap();
        assert_eq!(outcome.session.status(), SessionStatus::Lost);
        assert_eq!(outcome.session.attempts(), 8);
    }

    #[rstest]
    fn finished_session_is_not_found_and_frozen(harness: Harness) {
        harness.guess("Pikachu").unwrap();

        let error = harness.guess("Raichu").unwrap_err();

        assert_eq!(error, WorkflowError::session_not_found(harness.session));
        assert_eq!(harness.stored().attempts(), 1);
        assert_eq!(harness.stats.get(&player()).unwrap().total_games(), 1);
    }

    #[rstest]
    #[case("Missingno")]
    #[case("   ")]
    #[case("Pika")]
    fn unknown_name_mutates_nothing(harness: Harness, #[case] name: &str) {
        let error = harness.guess(name).unwrap_err();

        assert!(matches!(error, WorkflowError::EntityNotFound { .. }));
        assert_eq!(harness.stored().attempts(), 0);
        assert_eq!(harness.stats.upsert_count(), 0);
    }

    #[rstest]
    fn unknown_session_wins_over_unknown_name(harness: Harness) {
        let unknown = SessionIdentifier::new();
        let workflow = guess(&harness.catalog, &harness.sessions, &harness.stats);

        let error = workflow(GuessCommand::new(unknown, "Missingno")).unwrap_err();

        assert_eq!(error, WorkflowError::session_not_found(unknown));
    }

    #[rstest]
    fn clock_is_read_once_the_session_lock_is_held() {
        let delay = std::time::Duration::from_millis(20);
        let harness = Harness::build(
            MockSessionRepository::with_lock_delay(delay),
            MockStatsRepository::default(),
        );
        let requested_at = Timestamp::now();

        let outcome = harness.guess("Pikachu").unwrap();

        let waited = *outcome.session.updated_at().as_datetime() - *requested_at.as_datetime();
        assert!(waited >= chrono::Duration::milliseconds(20));
        let row = harness.stats.get(&player()).unwrap();
        assert_eq!(row.updated_at(), outcome.session.updated_at());
    }

    #[rstest]
    fn missing_target_is_internal() {
        let catalog = MockCatalog::new(vec![raichu()]);
        let sessions = MockSessionRepository::default();
        let stats = MockStatsRepository::default();
        let session = Session::start(
            SessionIdentifier::new(),
            player(),
            pikachu().rank(),
            Timestamp::now(),
        );
        let identifier = session.identifier();
        sessions.insert(session).unwrap();

        let error = guess(&catalog, &sessions, &stats)(GuessCommand::new(identifier, "Raichu"))
            .unwrap_err();

        assert_eq!(error, WorkflowError::TargetMissing { rank: 25 });
        assert_eq!(sessions.get(identifier).unwrap().attempts(), 0);
    }
}
