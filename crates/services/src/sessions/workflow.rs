use std::sync::Arc;

use quiz_core::model::QuestionBank;
use storage::{QuestionSource, records_into_bank};

use super::service::QuizSession;
use crate::error::QuizLoadError;

/// Owns a validated question bank and hands out sessions over it.
#[derive(Debug, Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }

    /// Load and validate a bank from `source`.
    ///
    /// Nothing is started against invalid data: the first integrity problem aborts
    /// the load.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError::Storage` if the source cannot be read and
    /// `QuizLoadError::Bank` if the data breaks a bank or question invariant.
    pub async fn load(source: &dyn QuestionSource) -> Result<Self, QuizLoadError> {
        let origin = source.describe();
        let records = source.load_records().await.inspect_err(|err| {
            tracing::error!(source = %origin, error = %err, "failed to read question bank");
        })?;
        let bank = records_into_bank(records).inspect_err(|err| {
            tracing::error!(source = %origin, error = %err, "question bank rejected");
        })?;

        tracing::info!(source = %origin, questions = bank.len(), "question bank loaded");
        Ok(Self::new(bank))
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// Start a fresh session at the first question.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        tracing::info!(questions = self.bank.len(), "quiz session started");
        QuizSession::new(self.bank())
    }
}
