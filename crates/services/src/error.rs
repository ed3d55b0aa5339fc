//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{BankError, OptionId};
use storage::StorageError;

/// Errors emitted by `QuizSession` transitions.
///
/// Every variant except `Corrupted` is a rejected transition: the session is
/// left exactly as it was and the caller may carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no answer selected")]
    NoSelection,
    #[error("option {option_id} is not part of the current question")]
    UnknownOption { option_id: OptionId },
    #[error("answer already submitted for this question")]
    AlreadyRevealed,
    #[error("answer has not been submitted yet")]
    NotRevealed,
    #[error("quiz already completed")]
    Completed,
    /// The session points outside its own bank. Not recoverable.
    #[error("session state is corrupted: {0}")]
    Corrupted(#[source] BankError),
}

impl SessionError {
    /// True for rejected transitions that left the session untouched.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        !matches!(self, Self::Corrupted(_))
    }
}

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid question bank: {0}")]
    Bank(#[from] BankError),
}
