use async_trait::async_trait;
use quiz_core::model::{AnswerOption, BankError, Question, QuestionBank, QuestionError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Wire shape of one answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionRecord {
    pub id: String,
    pub label: String,
}

/// Wire shape of one question, as found in question bank files.
///
/// Records are unvalidated; `into_question` turns them into a domain `Question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub id: String,
    pub label: String,
    pub answer: String,
    pub explanation: String,
    pub options: Vec<OptionRecord>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().to_string(),
            label: question.label().to_owned(),
            answer: question.answer().to_string(),
            explanation: question.explanation().to_owned(),
            options: question
                .options()
                .iter()
                .map(|option| OptionRecord {
                    id: option.id().to_string(),
                    label: option.label().to_owned(),
                })
                .collect(),
        }
    }

    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record breaks a question invariant.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let options = self
            .options
            .into_iter()
            .map(|option| AnswerOption::new(option.id, option.label))
            .collect();
        Question::new(self.id, self.label, self.answer, self.explanation, options)
    }
}

/// Validate a full list of records into a bank, stopping at the first problem.
///
/// # Errors
///
/// Returns `BankError::InvalidQuestion` naming the first bad record, or the
/// bank-level errors from `QuestionBank::new`.
pub fn records_into_bank(records: Vec<QuestionRecord>) -> Result<QuestionBank, BankError> {
    let mut questions = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let id = record.id.clone();
        let question = record
            .into_question()
            .map_err(|source| BankError::InvalidQuestion {
                position,
                id,
                source,
            })?;
        questions.push(question);
    }
    QuestionBank::new(questions)
}

/// Read-only source of question records.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load every record in bank order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or parsed.
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Records held in memory, for tests and embedding.
#[derive(Clone, Default)]
pub struct InMemorySource {
    records: Arc<[QuestionRecord]>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Ok(self.records.to_vec())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}
