//! Text and JSON rendering of provider responses.

use serde::Serialize;

use dexdle_domain::entity::CategoryTag;
use dexdle_domain::stats::StatsSummary;
use dexdle_providers::ErrorReport;
use dexdle_providers::dto::{
    GuessReport, SessionSummary, SettingsResponse, StartGameResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per response line.
    Json,
}

/// Renders `value` as JSON, or as text through `text`.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if JSON serialization fails.
pub fn render<T, F>(value: &T, format: OutputFormat, text: F) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Text => Ok(text(value)),
    }
}

fn join_categories(categories: &[CategoryTag]) -> String {
    categories
        .iter()
        .map(|tag| tag.display_name())
        .collect::<Vec<_>>()
        .join("/")
}

// =============================================================================
// Text Renderers
// =============================================================================

#[must_use]
pub fn start_text(response: &StartGameResponse) -> String {
    format!("{} (session {})", response.message, response.session_id)
}

#[must_use]
pub fn guess_text(report: &GuessReport) -> String {
    let feedback = &report.feedback;
    let verdicts = &feedback.verdicts;
    let header = format!(
        "{} No.{:04}  attempt {}  [{}]",
        feedback.name, feedback.rank, report.attempts, report.status
    );

    let rows = [
        ("rank", feedback.rank.to_string(), verdicts.rank.to_string()),
        (
            "categories",
            join_categories(&feedback.categories),
            verdicts.categories.to_string(),
        ),
        ("size", format!("{} m", feedback.size), verdicts.size.to_string()),
        ("mass", format!("{} kg", feedback.mass), verdicts.mass.to_string()),
        (
            "generation",
            feedback.generation.to_string(),
            verdicts.generation.to_string(),
        ),
        ("depth", feedback.depth.to_string(), verdicts.depth.to_string()),
    ];
    let rows = rows
        .into_iter()
        .map(|(label, value, verdict)| format!("  {label:<11} {value:<16} {verdict}"));

    let answer = report.answer.as_ref().map(|answer| {
        let outcome = if verdicts.name_match { "Correct!" } else { "Out of attempts." };
        format!("{outcome} The answer was {} (No.{:04}).", answer.name, answer.rank)
    });

    std::iter::once(header)
        .chain(rows)
        .chain(answer)
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn stats_text(stats: &StatsSummary) -> String {
    let best = stats
        .best_attempts
        .map_or_else(|| "-".to_string(), |best| best.to_string());
    format!(
        "games {}  cleared {}  clear rate {:.1}%  average {:.1}  best {}",
        stats.total_games, stats.cleared_games, stats.clear_rate, stats.average_attempts, best
    )
}

#[must_use]
pub fn settings_text(settings: &SettingsResponse) -> String {
    format!("max attempts: {}", settings.max_attempts)
}

#[must_use]
pub fn names_text(names: &[String]) -> String {
    if names.is_empty() {
        return "no matching names".to_string();
    }
    names.join(", ")
}

#[must_use]
pub fn history_text(sessions: &[SessionSummary]) -> String {
    if sessions.is_empty() {
        return "no games yet".to_string();
    }
    sessions
        .iter()
        .map(|session| {
            format!(
                "{}  {:<6}  {} attempts  started {}",
                session.session_id, session.status, session.attempts, session.created_at
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn error_text(report: &ErrorReport) -> String {
    format!("error [{}]: {}", report.code, report.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexdle_domain::comparison::{ExactVerdict, GuessFeedback, OrderedVerdict, SetVerdict, VerdictSet};
    use dexdle_domain::session::SessionStatus;
    use dexdle_providers::dto::EntityView;
    use rstest::rstest;

    fn report(answer: Option<EntityView>, name_match: bool) -> GuessReport {
        GuessReport {
            feedback: GuessFeedback {
                name: "ライチュウ".to_string(),
                rank: 26,
                categories: vec![CategoryTag::Electric],
                size: 0.8,
                mass: 30.0,
                generation: 1,
                depth: 2,
                verdicts: VerdictSet {
                    name_match,
                    rank: OrderedVerdict::Lower,
                    categories: SetVerdict::Match,
                    size: OrderedVerdict::Lower,
                    mass: OrderedVerdict::Lower,
                    generation: ExactVerdict::Match,
                    depth: ExactVerdict::Match,
                },
            },
            attempts: 3,
            status: if answer.is_some() {
                SessionStatus::Lost
            } else {
                SessionStatus::Active
            },
            answer,
        }
    }

    #[rstest]
    fn guess_text_lists_every_attribute() {
        let text = guess_text(&report(None, false));

        assert!(text.starts_with("ライチュウ No.0026  attempt 3  [active]"));
        assert!(text.contains("categories  Electric"));
        assert!(text.contains("30 kg"));
        assert_eq!(text.lines().count(), 7);
        assert!(!text.contains("answer"));
    }

    #[rstest]
    #[case(true, "Correct! The answer was ピカチュウ (No.0025).")]
    #[case(false, "Out of attempts. The answer was ピカチュウ (No.0025).")]
    fn finished_guess_reveals_answer(#[case] name_match: bool, #[case] last_line: &str) {
        let answer = EntityView {
            rank: 25,
            name: "ピカチュウ".to_string(),
            secondary_name: Some("pikachu".to_string()),
            categories: vec![CategoryTag::Electric],
            size: 0.4,
            mass: 6.0,
            generation: 1,
            depth: 2,
        };

        let text = guess_text(&report(Some(answer), name_match));

        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().last(), Some(last_line));
        assert!(!text.ends_with('\n'));
    }

    #[rstest]
    #[case(None, "best -")]
    #[case(Some(3), "best 3")]
    fn stats_text_shows_best(#[case] best: Option<u32>, #[case] expected: &str) {
        let stats = StatsSummary {
            total_games: 3,
            cleared_games: 2,
            clear_rate: 66.7,
            average_attempts: 4.0,
            best_attempts: best,
        };

        let text = stats_text(&stats);

        assert!(text.contains("clear rate 66.7%"));
        assert!(text.ends_with(expected));
    }

    #[rstest]
    fn json_format_serializes_value() {
        let settings = SettingsResponse { max_attempts: 8 };

        let rendered = render(&settings, OutputFormat::Json, settings_text).unwrap();

        assert_eq!(rendered, r#"{"max_attempts":8}"#);
    }

    #[rstest]
    fn text_format_uses_renderer() {
        let report = ErrorReport::new("ENTITY_NOT_FOUND", "no entity named 'x'");
        let rendered = render(&report, OutputFormat::Text, error_text).unwrap();
        assert_eq!(rendered, "error [ENTITY_NOT_FOUND]: no entity named 'x'");
    }
}
