//! Error types for the quiz engine.
//!
//! Both variants are fatal to the operation that raised them but leave the
//! session intact, so a driver can decide whether to retry or abort.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A difficulty label, index, or menu choice outside the three tiers.
    #[error("invalid difficulty tier: {0:?} (expected Easy, Medium or Hard)")]
    InvalidTier(String),

    /// `log_attempt` was called without a preceding `start_puzzle`.
    #[error("no puzzle in progress: start_puzzle must be called before log_attempt")]
    NoPendingPuzzle,
}

impl QuizError {
    /// Returns `true` for sequencing mistakes made by the caller, as opposed
    /// to bad input values.
    pub fn is_state_error(&self) -> bool {
        matches!(self, QuizError::NoPendingPuzzle)
    }
}
