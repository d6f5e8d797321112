//! # adaptive_quiz
//!
//! An offline arithmetic quiz engine that adapts difficulty to the player.
//!
//! Puzzles come in three tiers (Easy sums, Medium differences, Hard
//! products). Every answer is timed; a fast correct answer moves the player
//! up a tier, a wrong answer moves them down, and a slow correct answer keeps
//! them where they are.
//!
//! ## How it works
//!
//! 1. Call [`generate`] (or [`generate_puzzle`] with a [`PuzzleRequest`] for
//!    a reproducible puzzle) to get a question and its answer.
//! 2. Call [`PerformanceTracker::start_puzzle`] when the question is shown and
//!    [`PerformanceTracker::log_attempt`] when it is answered.
//! 3. Feed the last [`Attempt`] to [`next_difficulty`] to pick the next tier.
//! 4. [`PerformanceTracker::get_summary`] aggregates accuracy and mean time.
//!
//! [`QuizSession`] bundles those steps for one player, and is what the
//! `adaptive-quiz` binary drives.
//!
//! ## Quick start
//!
//! ```rust
//! use adaptive_quiz::{generate, next_difficulty, DifficultyTier, PerformanceTracker};
//!
//! let mut tier = DifficultyTier::Easy;
//! let mut tracker = PerformanceTracker::new();
//!
//! let puzzle = generate(tier);
//! println!("{}", puzzle.question);
//!
//! tracker.start_puzzle();
//! let attempt = *tracker.log_attempt(tier, puzzle.check(puzzle.answer)).unwrap();
//! tier = next_difficulty(tier, &attempt);
//!
//! assert_eq!(tier, DifficultyTier::Medium);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `adaptive_quiz::generate`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate, generate_for_label, generate_puzzle, next_difficulty, next_difficulty_observed,
    render_summary, session_report_json, Adjustment, Attempt, Clock, Decision,
    DifficultyObserver, DifficultyTier, PerformanceTracker, Puzzle, PuzzleRequest, QuizError,
    QuizSession, RoundOutcome, SessionConfig, SessionSummary, Summary, TracingObserver,
    FAST_THRESHOLD_SECS,
};

#[cfg(test)]
mod tests;
