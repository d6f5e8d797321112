use serde_json::{json, Value};

use crate::quiz_engine::{
    models::{Attempt, Summary},
    session::QuizSession,
};

/// Message shown when a session ends before any attempt was logged.
pub const NO_ATTEMPTS: &str = "No attempts were logged.";

/// Render the end-of-session block shown to players.
pub fn render_summary(summary: &Summary) -> String {
    match summary {
        Summary::Empty => NO_ATTEMPTS.to_string(),
        Summary::Stats(s) => format!(
            "--- Session Summary ---\n\
             Total Puzzles: {}\n\
             Correct Answers: {}\n\
             Accuracy: {:.2}%\n\
             Average Time: {:.2} seconds per puzzle\n\
             ---------------------",
            s.total, s.correct, s.accuracy_pct, s.avg_time_seconds
        ),
    }
}

/// One attempt as the JSON report lists it.
fn attempt_json(index: usize, a: &Attempt) -> Value {
    json!({
        "round":           index + 1,
        "tier":            a.tier,
        "was_correct":     a.was_correct,
        "elapsed_seconds": a.elapsed_seconds,
    })
}

/// Machine-readable report for a session, finished or not.
///
/// `summary` is `null` while nothing has been logged.
pub fn session_report_json(session: &QuizSession) -> Value {
    let attempts: Vec<Value> = session
        .tracker()
        .attempts()
        .iter()
        .enumerate()
        .map(|(i, a)| attempt_json(i, a))
        .collect();

    let summary = match session.summary() {
        Summary::Empty => Value::Null,
        Summary::Stats(s) => json!({
            "total":            s.total,
            "correct":          s.correct,
            "accuracy_pct":     s.accuracy_pct,
            "avg_time_seconds": s.avg_time_seconds,
        }),
    };

    json!({
        "player":           session.player_name(),
        "starting_tier":    session.config().starting_tier,
        "rounds_played":    session.completed_rounds(),
        "rounds_total":     session.total_puzzles(),
        "complete":         session.is_complete(),
        "attempts":         attempts,
        "summary":          summary,
        "recommended_tier": session.recommended_tier(),
    })
}
