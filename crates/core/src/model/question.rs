use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question must have at least one option")]
    NoOptions,

    #[error("option #{index} has an empty id")]
    EmptyOptionId { index: usize },

    #[error("duplicate option id: {0}")]
    DuplicateOptionId(OptionId),

    #[error("answer {0} does not match any option id")]
    UnknownAnswer(OptionId),
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable answer choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    id: OptionId,
    label: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: impl Into<OptionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice quiz item.
///
/// Always valid once constructed: options are non-empty, option ids are
/// non-empty and unique, and `answer` names exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    label: String,
    answer: OptionId,
    explanation: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id is empty, there are no options, an option
    /// id is empty or repeated, or `answer` is not one of the option ids.
    pub fn new(
        id: impl Into<QuestionId>,
        label: impl Into<String>,
        answer: impl Into<OptionId>,
        explanation: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, QuestionError> {
        let id = id.into();
        let answer = answer.into();

        if id.is_empty() {
            return Err(QuestionError::EmptyId);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            if option.id.is_empty() {
                return Err(QuestionError::EmptyOptionId { index });
            }
            if !seen.insert(option.id.as_str()) {
                return Err(QuestionError::DuplicateOptionId(option.id.clone()));
            }
        }

        if !seen.contains(answer.as_str()) {
            return Err(QuestionError::UnknownAnswer(answer));
        }

        Ok(Self {
            id,
            label: label.into(),
            answer,
            explanation: explanation.into(),
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Id of the correct option.
    #[must_use]
    pub fn answer(&self) -> &OptionId {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id.as_str() == id)
    }

    #[must_use]
    pub fn has_option(&self, id: &str) -> bool {
        self.option(id).is_some()
    }

    /// Exact, case-sensitive comparison against the answer id.
    #[must_use]
    pub fn is_correct(&self, id: &str) -> bool {
        self.answer.as_str() == id
    }

    #[must_use]
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.option(self.answer.as_str())
    }
}
