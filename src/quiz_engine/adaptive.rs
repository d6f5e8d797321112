//! The adaptive difficulty rule.
//!
//! Only the most recent attempt matters:
//!
//! | Correct | Faster than [`FAST_THRESHOLD_SECS`] | Next tier |
//! |---------|------------------------------------|-----------|
//! | yes     | yes                                | one up (capped at Hard) |
//! | yes     | no                                 | unchanged |
//! | no      | either                             | one down (floored at Easy) |
//!
//! The comparison is strict: an answer taking exactly five seconds is slow.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quiz_engine::models::{Attempt, DifficultyTier};

/// Answers strictly below this many seconds count as fast.
pub const FAST_THRESHOLD_SECS: f64 = 5.0;

/// Which branch of the rule fired for an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    StepUp,
    Stay,
    StepDown,
}

impl Decision {
    pub fn reason(self) -> &'static str {
        match self {
            Decision::StepUp   => "Correct and fast. Increasing difficulty.",
            Decision::Stay     => "Correct but slow. Staying at same level.",
            Decision::StepDown => "Incorrect. Decreasing difficulty.",
        }
    }

    pub fn apply(self, current: DifficultyTier) -> DifficultyTier {
        match self {
            Decision::StepUp   => current.step_up(),
            Decision::Stay     => current,
            Decision::StepDown => current.step_down(),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Classify an attempt without touching any tier.
pub fn decide(last: &Attempt) -> Decision {
    if !last.was_correct {
        Decision::StepDown
    } else if last.elapsed_seconds < FAST_THRESHOLD_SECS {
        Decision::StepUp
    } else {
        Decision::Stay
    }
}

/// Next tier after `last` was answered at `current`. Pure and deterministic.
pub fn next_difficulty(current: DifficultyTier, last: &Attempt) -> DifficultyTier {
    decide(last).apply(current)
}

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// A tier change (or non-change) reported to a [`DifficultyObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub from: DifficultyTier,
    pub to: DifficultyTier,
    pub decision: Decision,
}

/// Hook for drivers that want to narrate or log the rule's decisions.
pub trait DifficultyObserver {
    fn on_adjustment(&mut self, adjustment: &Adjustment);
}

impl<F: FnMut(&Adjustment)> DifficultyObserver for F {
    fn on_adjustment(&mut self, adjustment: &Adjustment) {
        self(adjustment)
    }
}

/// Emits every adjustment as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DifficultyObserver for TracingObserver {
    fn on_adjustment(&mut self, adj: &Adjustment) {
        debug!(
            from = %adj.from,
            to = %adj.to,
            decision = ?adj.decision,
            "{}",
            adj.decision.reason()
        );
    }
}

/// Same as [`next_difficulty`], additionally reporting the outcome to
/// `observer`.
pub fn next_difficulty_observed<O: DifficultyObserver + ?Sized>(
    current: DifficultyTier,
    last: &Attempt,
    observer: &mut O,
) -> DifficultyTier {
    let decision = decide(last);
    let next = decision.apply(current);
    observer.on_adjustment(&Adjustment { from: current, to: next, decision });
    next
}
