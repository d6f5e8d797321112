//! Explicit per-session state.
//!
//! A [`QuizSession`] owns everything one player's run needs: the tier cursor,
//! the performance tracker, the RNG and the outstanding puzzle. Nothing is
//! shared between sessions, so any number of them can coexist.
//!
//! ```rust
//! use adaptive_quiz::{QuizSession, SessionConfig, DifficultyTier};
//!
//! let mut session = QuizSession::new(SessionConfig {
//!     starting_tier: DifficultyTier::Medium,
//!     rng_seed: Some(3),
//!     ..SessionConfig::new("Ada")
//! });
//! while let Some(puzzle) = session.next_puzzle() {
//!     let answer = puzzle.answer;
//!     session.submit_answer(answer).unwrap();
//! }
//! assert!(session.summary().stats().is_some());
//! ```

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::quiz_engine::{
    adaptive::{decide, Adjustment, DifficultyObserver, TracingObserver},
    clock::Clock,
    error::QuizError,
    generator::generate_with_rng,
    models::{Attempt, DifficultyTier, Puzzle, Summary},
    tracker::PerformanceTracker,
};

/// Rounds per session unless configured otherwise.
pub const DEFAULT_TOTAL_PUZZLES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub player_name: String,
    pub starting_tier: DifficultyTier,
    pub total_puzzles: usize,
    /// `Some` makes the puzzle sequence reproducible.
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(player_name: impl Into<String>) -> Self {
        SessionConfig {
            player_name: player_name.into(),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            player_name: "Player".to_string(),
            starting_tier: DifficultyTier::Easy,
            total_puzzles: DEFAULT_TOTAL_PUZZLES,
            rng_seed: None,
        }
    }
}

/// Everything a driver needs to give feedback after one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOutcome {
    /// 1-based round number.
    pub round: usize,
    pub puzzle: Puzzle,
    pub given_answer: i64,
    pub attempt: Attempt,
    pub adjustment: Adjustment,
    pub is_complete: bool,
}

impl RoundOutcome {
    pub fn was_correct(&self) -> bool {
        self.attempt.was_correct
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    config: SessionConfig,
    tier: DifficultyTier,
    tracker: PerformanceTracker,
    rng: StdRng,
    completed: usize,
    current: Option<Puzzle>,
}

impl QuizSession {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        info!(
            player = %config.player_name,
            tier = %config.starting_tier,
            rounds = config.total_puzzles,
            "session started"
        );
        QuizSession {
            tier: config.starting_tier,
            tracker: PerformanceTracker::new(),
            rng,
            completed: 0,
            current: None,
            config,
        }
    }

    /// Replace the tracker's time source (tests pin response times this way).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.tracker = self.tracker.with_clock(clock);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn player_name(&self) -> &str {
        &self.config.player_name
    }

    pub fn current_tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Rounds answered so far.
    pub fn completed_rounds(&self) -> usize {
        self.completed
    }

    pub fn total_puzzles(&self) -> usize {
        self.config.total_puzzles
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.config.total_puzzles
    }

    pub fn tracker(&self) -> &PerformanceTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut PerformanceTracker {
        &mut self.tracker
    }

    /// The puzzle waiting for an answer, if any.
    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current.as_ref()
    }

    /// Present the next puzzle and start its timer.
    ///
    /// Returns the outstanding puzzle unchanged (timer untouched) if the
    /// previous one has not been answered yet, and `None` once every round
    /// has been played.
    pub fn next_puzzle(&mut self) -> Option<&Puzzle> {
        if self.is_complete() {
            return None;
        }
        if self.current.is_none() {
            let puzzle = generate_with_rng(&mut self.rng, self.tier);
            debug!(round = self.completed + 1, question = %puzzle.question, "presenting puzzle");
            self.tracker.start_puzzle();
            self.current = Some(puzzle);
        }
        self.current.as_ref()
    }

    /// Answer the outstanding puzzle, logging the attempt through the
    /// tracing observer.
    pub fn submit_answer(&mut self, answer: i64) -> Result<RoundOutcome, QuizError> {
        self.submit_answer_observed(answer, &mut TracingObserver)
    }

    /// Check `answer`, log the attempt and move the tier cursor.
    ///
    /// The tier adapts after every round, including the last, so
    /// [`recommended_tier`](Self::recommended_tier) reflects the final
    /// answer. Fails with [`QuizError::NoPendingPuzzle`] when no puzzle is
    /// outstanding.
    pub fn submit_answer_observed<O: DifficultyObserver + ?Sized>(
        &mut self,
        answer: i64,
        observer: &mut O,
    ) -> Result<RoundOutcome, QuizError> {
        let puzzle = self.current.take().ok_or(QuizError::NoPendingPuzzle)?;
        let was_correct = puzzle.check(answer);
        let attempt = match self.tracker.log_attempt(puzzle.tier, was_correct) {
            Ok(attempt) => *attempt,
            Err(e) => {
                self.current = Some(puzzle);
                return Err(e);
            }
        };

        let decision = decide(&attempt);
        let adjustment = Adjustment {
            from: self.tier,
            to: decision.apply(self.tier),
            decision,
        };
        observer.on_adjustment(&adjustment);
        self.tier = adjustment.to;
        self.completed += 1;

        Ok(RoundOutcome {
            round: self.completed,
            puzzle,
            given_answer: answer,
            attempt,
            adjustment,
            is_complete: self.is_complete(),
        })
    }

    pub fn summary(&self) -> Summary {
        self.tracker.get_summary()
    }

    /// Suggested starting tier for the player's next session.
    pub fn recommended_tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Start over with the same player and starting tier. The RNG keeps
    /// running, so the new round sequence differs from the previous one.
    pub fn restart(&mut self) {
        self.tracker.reset();
        self.tier = self.config.starting_tier;
        self.completed = 0;
        self.current = None;
        info!(player = %self.config.player_name, "session restarted");
    }
}
