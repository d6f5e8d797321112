use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

/// The three ordered difficulty levels. `Easy < Medium < Hard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// All tiers in ascending order.
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
    ];

    /// Position in the ordering: 0 for Easy, 2 for Hard.
    pub fn index(self) -> usize {
        match self {
            DifficultyTier::Easy   => 0,
            DifficultyTier::Medium => 1,
            DifficultyTier::Hard   => 2,
        }
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Result<Self, QuizError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| QuizError::InvalidTier(format!("index {index}")))
    }

    /// Label shown to players.
    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::Easy   => "Easy",
            DifficultyTier::Medium => "Medium",
            DifficultyTier::Hard   => "Hard",
        }
    }

    /// One tier harder; Hard stays Hard.
    pub fn step_up(self) -> Self {
        match self {
            DifficultyTier::Easy   => DifficultyTier::Medium,
            DifficultyTier::Medium => DifficultyTier::Hard,
            DifficultyTier::Hard   => DifficultyTier::Hard,
        }
    }

    /// One tier easier; Easy stays Easy.
    pub fn step_down(self) -> Self {
        match self {
            DifficultyTier::Easy   => DifficultyTier::Easy,
            DifficultyTier::Medium => DifficultyTier::Easy,
            DifficultyTier::Hard   => DifficultyTier::Medium,
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Only the exact labels `Easy`, `Medium` and `Hard` are accepted.
impl FromStr for DifficultyTier {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy"   => Ok(DifficultyTier::Easy),
            "Medium" => Ok(DifficultyTier::Medium),
            "Hard"   => Ok(DifficultyTier::Hard),
            other    => Err(QuizError::InvalidTier(other.to_string())),
        }
    }
}

/// Menu numbering: 1 = Easy, 2 = Medium, 3 = Hard.
impl TryFrom<u8> for DifficultyTier {
    type Error = QuizError;

    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(DifficultyTier::Easy),
            2 => Ok(DifficultyTier::Medium),
            3 => Ok(DifficultyTier::Hard),
            other => Err(QuizError::InvalidTier(format!("choice {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Puzzles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "x",
        }
    }

    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single arithmetic question and its answer. Built fresh every round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub tier: DifficultyTier,
    pub operands: [i64; 2],
    pub operator: Operator,
    /// Player-facing text, e.g. "What is 7 + 5?".
    pub question: String,
    pub answer: i64,
}

impl Puzzle {
    /// Build a puzzle from its operands; question text and answer are derived.
    pub fn new(tier: DifficultyTier, lhs: i64, operator: Operator, rhs: i64) -> Self {
        Puzzle {
            tier,
            operands: [lhs, rhs],
            operator,
            question: format!("What is {lhs} {operator} {rhs}?"),
            answer: operator.apply(lhs, rhs),
        }
    }

    pub fn check(&self, answer: i64) -> bool {
        answer == self.answer
    }
}

/// Input to [`generate_puzzle`](crate::quiz_engine::generate_puzzle).
///
/// `rng_seed: Some(_)` reproduces the same puzzle every time; `None` draws
/// from OS entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRequest {
    pub tier: DifficultyTier,
    pub rng_seed: Option<u64>,
}

impl PuzzleRequest {
    pub fn new(tier: DifficultyTier) -> Self {
        PuzzleRequest { tier, rng_seed: None }
    }

    pub fn seeded(tier: DifficultyTier, seed: u64) -> Self {
        PuzzleRequest { tier, rng_seed: Some(seed) }
    }
}

// ---------------------------------------------------------------------------
// Attempts and summaries
// ---------------------------------------------------------------------------

/// One logged round. Never mutated after the tracker records it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub tier: DifficultyTier,
    pub was_correct: bool,
    pub elapsed_seconds: f64,
}

impl Attempt {
    pub fn new(tier: DifficultyTier, was_correct: bool, elapsed_seconds: f64) -> Self {
        Attempt { tier, was_correct, elapsed_seconds }
    }
}

/// Aggregate statistics over a non-empty attempt log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total: usize,
    pub correct: usize,
    /// 0.0..=100.0
    pub accuracy_pct: f64,
    /// Mean over every attempt, correct or not.
    pub avg_time_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Summary {
    /// Nothing has been logged yet.
    Empty,
    Stats(SessionSummary),
}

impl Summary {
    pub fn stats(&self) -> Option<&SessionSummary> {
        match self {
            Summary::Empty    => None,
            Summary::Stats(s) => Some(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(DifficultyTier::Easy < DifficultyTier::Medium);
        assert!(DifficultyTier::Medium < DifficultyTier::Hard);
        for (i, tier) in DifficultyTier::ALL.into_iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(DifficultyTier::from_index(i).unwrap(), tier);
        }
    }

    #[test]
    fn stepping_clamps_at_the_ends() {
        assert_eq!(DifficultyTier::Hard.step_up(), DifficultyTier::Hard);
        assert_eq!(DifficultyTier::Easy.step_down(), DifficultyTier::Easy);
        assert_eq!(DifficultyTier::Easy.step_up(), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::Hard.step_down(), DifficultyTier::Medium);
    }

    #[test]
    fn parses_exact_labels_only() {
        for tier in DifficultyTier::ALL {
            assert_eq!(tier.label().parse::<DifficultyTier>().unwrap(), tier);
        }
        for label in ["hard", " medium ", "HARD", "easy", "Easy\n", ""] {
            assert_eq!(
                label.parse::<DifficultyTier>(),
                Err(QuizError::InvalidTier(label.to_string())),
                "{label:?} must not be accepted"
            );
        }
    }

    #[test]
    fn unknown_labels_are_invalid_tier() {
        let err = "Expert".parse::<DifficultyTier>().unwrap_err();
        assert!(matches!(err, QuizError::InvalidTier(ref label) if label == "Expert"));
        assert!(DifficultyTier::from_index(3).is_err());
        assert!(DifficultyTier::try_from(0u8).is_err());
        assert!(DifficultyTier::try_from(4u8).is_err());
    }

    #[test]
    fn menu_choices_map_to_tiers() {
        assert_eq!(DifficultyTier::try_from(1u8).unwrap(), DifficultyTier::Easy);
        assert_eq!(DifficultyTier::try_from(2u8).unwrap(), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::try_from(3u8).unwrap(), DifficultyTier::Hard);
    }

    #[test]
    fn puzzle_derives_question_and_answer() {
        let p = Puzzle::new(DifficultyTier::Hard, 12, Operator::Mul, 3);
        assert_eq!(p.question, "What is 12 x 3?");
        assert_eq!(p.answer, 36);
        assert!(p.check(36));
        assert!(!p.check(35));
    }

    #[test]
    fn summary_serializes_with_status_tag() {
        let json = serde_json::to_value(Summary::Empty).unwrap();
        assert_eq!(json["status"], "empty");
    }
}
