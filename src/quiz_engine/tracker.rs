//! Per-session performance log.
//!
//! The tracker times each round between [`PerformanceTracker::start_puzzle`]
//! and [`PerformanceTracker::log_attempt`] and keeps an append-only list of
//! [`Attempt`]s. One tracker belongs to exactly one session.

use std::time::Instant;
use tracing::debug;

use crate::quiz_engine::{
    clock::Clock,
    error::QuizError,
    models::{Attempt, DifficultyTier, SessionSummary, Summary},
};

#[derive(Debug, Clone, Default)]
pub struct PerformanceTracker {
    clock: Clock,
    log: Vec<Attempt>,
    pending: Option<Instant>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Mark the moment a puzzle is shown. A second call before
    /// `log_attempt` replaces the first marker.
    pub fn start_puzzle(&mut self) {
        self.pending = Some(self.clock.now());
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the outcome of the round started by the last `start_puzzle`.
    ///
    /// The marker is consumed, so the next round needs its own
    /// `start_puzzle`. Without a marker the log is left untouched and
    /// [`QuizError::NoPendingPuzzle`] is returned.
    pub fn log_attempt(
        &mut self,
        tier: DifficultyTier,
        was_correct: bool,
    ) -> Result<&Attempt, QuizError> {
        let started = self.pending.take().ok_or(QuizError::NoPendingPuzzle)?;
        let elapsed = self.clock.now().saturating_duration_since(started).as_secs_f64();

        self.log.push(Attempt::new(tier, was_correct, elapsed));
        debug!(tier = %tier, was_correct, elapsed_secs = elapsed, "logged attempt");

        Ok(&self.log[self.log.len() - 1])
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.log
    }

    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.log.last()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Aggregate the whole log. Returns [`Summary::Empty`] when nothing has
    /// been logged.
    pub fn get_summary(&self) -> Summary {
        summarize(&self.log)
    }

    /// Drop all attempts and any pending marker. The clock is kept.
    pub fn reset(&mut self) {
        self.log.clear();
        self.pending = None;
    }
}

/// Accuracy and mean response time over `attempts`.
pub fn summarize(attempts: &[Attempt]) -> Summary {
    if attempts.is_empty() {
        return Summary::Empty;
    }

    let total = attempts.len();
    let correct = attempts.iter().filter(|a| a.was_correct).count();
    let total_time: f64 = attempts.iter().map(|a| a.elapsed_seconds).sum();

    Summary::Stats(SessionSummary {
        total,
        correct,
        accuracy_pct: 100.0 * correct as f64 / total as f64,
        avg_time_seconds: total_time / total as f64,
    })
}
