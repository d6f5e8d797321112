//! Core quiz engine — puzzle generation, performance tracking, and the
//! adaptive difficulty rule.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: tiers, puzzles, attempts, summaries |
//! | `error`     | `QuizError` for bad tiers and out-of-order calls |
//! | `generator` | Arithmetic puzzle per tier, seeded or from entropy |
//! | `clock`     | Monotonic or manually advanced time source |
//! | `tracker`   | Times rounds and aggregates the attempt log |
//! | `adaptive`  | Picks the next tier from the last attempt |
//! | `session`   | One player's run: tier cursor + tracker + RNG |
//! | `report`    | Text and JSON rendering of a session |

pub mod adaptive;
pub mod clock;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod session;
pub mod tracker;

// Re-export the public API surface so callers can use
// `quiz_engine::generate` without reaching into sub-modules.
pub use adaptive::{
    decide, next_difficulty, next_difficulty_observed, Adjustment, Decision,
    DifficultyObserver, TracingObserver, FAST_THRESHOLD_SECS,
};
pub use clock::Clock;
pub use error::QuizError;
pub use generator::{generate, generate_for_label, generate_puzzle, generate_with_rng};
pub use models::{
    Attempt, DifficultyTier, Operator, Puzzle, PuzzleRequest, SessionSummary, Summary,
};
pub use report::{render_summary, session_report_json};
pub use session::{QuizSession, RoundOutcome, SessionConfig, DEFAULT_TOTAL_PUZZLES};
pub use tracker::PerformanceTracker;
