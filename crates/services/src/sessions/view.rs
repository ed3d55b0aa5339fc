use quiz_core::model::{Question, Score};

use super::service::Reveal;

/// Everything a renderer needs for the current moment of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSnapshot {
    Active(ActiveQuestion),
    Completed { score: Score },
}

/// The question on screen, its position and the reveal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuestion {
    pub question: Question,
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub score: usize,
    pub reveal: Option<Reveal>,
}

impl ActiveQuestion {
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_some()
    }

    #[must_use]
    pub fn last_correct(&self) -> Option<bool> {
        self.reveal.as_ref().map(|reveal| reveal.correct)
    }

    /// Explanation text, only while revealed.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.reveal
            .as_ref()
            .map(|_| self.question.explanation())
    }
}
