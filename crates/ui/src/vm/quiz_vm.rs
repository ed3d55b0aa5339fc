use quiz_core::model::{OptionId, Score};
use services::{QuizSession, SessionError, SessionPhase, SessionSnapshot};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionId),
    Submit,
    Next,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Nothing changed: the intent was not valid for the current state.
    Ignored,
    Selected,
    Revealed { correct: bool },
    Advanced,
    Completed(Score),
    Restarted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
}

impl OptionVm {
    #[must_use]
    pub fn dom_id(&self) -> String {
        format!("option-{}", self.id)
    }

    #[must_use]
    pub fn select_intent(&self) -> QuizIntent {
        QuizIntent::Select(OptionId::new(self.id.clone()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub verdict: &'static str,
    pub class: &'static str,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub title: String,
    pub options: Vec<OptionVm>,
    pub revealed: bool,
    pub can_submit: bool,
    pub feedback: Option<FeedbackVm>,
    pub position_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedVm {
    pub score: Score,
    pub score_line: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionCardVm),
    Completed(CompletedVm),
}

/// Presentation state for one quiz run.
///
/// The session is the source of truth. `draft` is the radio selection the user has
/// made but not yet submitted; it never reaches the session until `Submit`.
#[derive(Clone, Debug)]
pub struct QuizVm {
    session: QuizSession,
    draft: Option<OptionId>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            draft: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn draft(&self) -> Option<&OptionId> {
        self.draft.as_ref()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.draft.is_some() && self.session.phase() == SessionPhase::Answering
    }

    /// # Errors
    ///
    /// Returns `ViewError::Corrupted` if the session can no longer be rendered.
    pub fn screen(&self) -> Result<QuizScreen, ViewError> {
        let snapshot = self.session.snapshot().map_err(ViewError::from_session)?;
        let active = match snapshot {
            SessionSnapshot::Completed { score } => {
                return Ok(QuizScreen::Completed(CompletedVm {
                    score,
                    score_line: format!("Your Score: {score}"),
                }));
            }
            SessionSnapshot::Active(active) => active,
        };

        let revealed = active.is_revealed();
        // Once revealed, the radio shows the submitted answer rather than the draft.
        let checked_id = match &active.reveal {
            Some(reveal) => Some(&reveal.selected),
            None => self.draft.as_ref(),
        };
        let options = active
            .question
            .options()
            .iter()
            .map(|option| OptionVm {
                id: option.id().to_string(),
                label: option.label().to_owned(),
                checked: checked_id == Some(option.id()),
                disabled: revealed,
            })
            .collect();
        let feedback = active.reveal.as_ref().map(|reveal| FeedbackVm {
            correct: reveal.correct,
            verdict: if reveal.correct { "Correct!" } else { "Incorrect" },
            class: if reveal.correct {
                "verdict verdict--correct"
            } else {
                "verdict verdict--incorrect"
            },
            explanation: active.question.explanation().to_owned(),
        });

        Ok(QuizScreen::Question(QuestionCardVm {
            title: active.question.label().to_owned(),
            options,
            revealed,
            can_submit: self.can_submit(),
            feedback,
            position_label: format!("Question {} of {}", active.number, active.total),
        }))
    }

    /// Apply a user intent.
    ///
    /// Intents that do not fit the current state are ignored and leave both the
    /// draft and the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Corrupted` if the session reports a broken invariant.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Select(option_id) => {
                let selectable = self.session.phase() == SessionPhase::Answering
                    && self
                        .session
                        .current_question()
                        .is_some_and(|question| question.has_option(option_id.as_str()));
                if !selectable {
                    return Ok(QuizOutcome::Ignored);
                }
                self.draft = Some(option_id);
                Ok(QuizOutcome::Selected)
            }
            QuizIntent::Submit => {
                let Some(draft) = self.draft.as_ref() else {
                    return Ok(QuizOutcome::Ignored);
                };
                match self.session.submit_answer(draft.as_str()) {
                    Ok(outcome) => Ok(QuizOutcome::Revealed {
                        correct: outcome.correct,
                    }),
                    Err(err) => ignore_invalid(err),
                }
            }
            QuizIntent::Next => match self.session.advance() {
                Ok(services::AdvanceOutcome::Next { .. }) => {
                    self.draft = None;
                    Ok(QuizOutcome::Advanced)
                }
                Ok(services::AdvanceOutcome::Completed(score)) => {
                    self.draft = None;
                    Ok(QuizOutcome::Completed(score))
                }
                Err(err) => ignore_invalid(err),
            },
            QuizIntent::Restart => {
                self.session.restart();
                self.draft = None;
                Ok(QuizOutcome::Restarted)
            }
        }
    }
}

fn ignore_invalid(err: SessionError) -> Result<QuizOutcome, ViewError> {
    if err.is_invalid_transition() {
        Ok(QuizOutcome::Ignored)
    } else {
        Err(ViewError::from_session(err))
    }
}
