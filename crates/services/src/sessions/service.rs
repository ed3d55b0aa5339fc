use std::fmt;
use std::sync::Arc;

use quiz_core::model::{OptionId, Question, QuestionBank, QuestionId, Score};

use super::progress::SessionProgress;
use super::view::{ActiveQuestion, SessionSnapshot};
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// The submitted answer for the current question, visible while revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub selected: OptionId,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Answering,
    Revealed(Reveal),
    Completed,
}

/// Coarse phase of a session, without the reveal payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Answering,
    Revealed,
    Completed,
}

/// Result of an accepted `submit_answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub question_id: QuestionId,
    pub selected: OptionId,
    pub correct: bool,
    pub score: usize,
}

/// Result of an accepted `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next { index: usize },
    Completed(Score),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a question bank.
///
/// Steps through the bank in order. Each question is answered once, revealed,
/// then advanced past. Advancing from the last question completes the session;
/// only `restart` leaves the completed state.
///
/// Invariant: `score <= answered <= bank_len`, where `answered` counts the revealed
/// question, and `current_index == bank_len` exactly when completed.
#[derive(Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    current: usize,
    score: usize,
    state: SessionState,
}

impl QuizSession {
    /// Start a session at the first question with a zero score.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            current: 0,
            score: 0,
            state: SessionState::Answering,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn bank_len(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::Answering => SessionPhase::Answering,
            SessionState::Revealed(_) => SessionPhase::Revealed,
            SessionState::Completed => SessionPhase::Completed,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.state, SessionState::Revealed(_))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Completed)
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        match &self.state {
            SessionState::Revealed(reveal) => Some(reveal),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&OptionId> {
        self.reveal().map(|reveal| &reveal.selected)
    }

    /// Correctness of the last submission; only set while revealed.
    #[must_use]
    pub fn last_correct(&self) -> Option<bool> {
        self.reveal().map(|reveal| reveal.correct)
    }

    /// The question on screen, or `None` once completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            return None;
        }
        self.bank.get(self.current).ok()
    }

    #[must_use]
    pub fn final_score(&self) -> Option<Score> {
        self.is_complete()
            .then(|| Score::new(self.score, self.bank.len()))
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.bank.len();
        let answered = match self.state {
            SessionState::Answering => self.current,
            SessionState::Revealed(_) => self.current + 1,
            SessionState::Completed => total,
        };
        SessionProgress {
            position: (self.current + 1).min(total),
            total,
            answered,
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Owned snapshot of everything the presentation layer needs right now.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Corrupted` if the session index is outside its bank.
    pub fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        if self.is_complete() {
            return Ok(SessionSnapshot::Completed {
                score: Score::new(self.score, self.bank.len()),
            });
        }
        let question = self.bank.get(self.current).map_err(SessionError::Corrupted)?;
        Ok(SessionSnapshot::Active(ActiveQuestion {
            question: question.clone(),
            number: self.current + 1,
            total: self.bank.len(),
            score: self.score,
            reveal: self.reveal().cloned(),
        }))
    }

    /// Submit an answer for the current question and reveal the result.
    ///
    /// Correct iff `option_id` equals the question's answer exactly. Only
    /// accepted once per question; later calls are rejected without effect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyRevealed` or `SessionError::Completed` when the
    /// session is not waiting for an answer, `SessionError::NoSelection` for an empty
    /// id and `SessionError::UnknownOption` for an id the question does not offer.
    pub fn submit_answer(&mut self, option_id: &str) -> Result<SubmitOutcome, SessionError> {
        match self.state {
            SessionState::Answering => {}
            SessionState::Revealed(_) => return self.reject(SessionError::AlreadyRevealed),
            SessionState::Completed => return self.reject(SessionError::Completed),
        }
        if option_id.is_empty() {
            return self.reject(SessionError::NoSelection);
        }

        let question = self.bank.get(self.current).map_err(SessionError::Corrupted)?;
        if !question.has_option(option_id) {
            return self.reject(SessionError::UnknownOption {
                option_id: OptionId::new(option_id),
            });
        }
        let correct = question.is_correct(option_id);
        let question_id = question.id().clone();
        let selected = OptionId::new(option_id);

        if correct {
            self.score += 1;
        }
        self.state = SessionState::Revealed(Reveal {
            selected: selected.clone(),
            correct,
        });

        tracing::debug!(
            index = self.current,
            question = %question_id,
            selected = %selected,
            correct,
            score = self.score,
            "answer submitted"
        );

        Ok(SubmitOutcome {
            question_id,
            selected,
            correct,
            score: self.score,
        })
    }

    /// Move past a revealed question, completing the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotRevealed` before an answer is submitted and
    /// `SessionError::Completed` once the session is complete.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        match self.state {
            SessionState::Revealed(_) => {}
            SessionState::Answering => return self.reject(SessionError::NotRevealed),
            SessionState::Completed => return self.reject(SessionError::Completed),
        }

        let next = self.current + 1;
        if next < self.bank.len() {
            self.current = next;
            self.state = SessionState::Answering;
            tracing::debug!(index = next, score = self.score, "advanced to next question");
            return Ok(AdvanceOutcome::Next { index: next });
        }

        self.current = self.bank.len();
        self.state = SessionState::Completed;
        let score = Score::new(self.score, self.bank.len());
        tracing::info!(score = %score, "quiz completed");
        Ok(AdvanceOutcome::Completed(score))
    }

    /// Return to the first question with a zero score, from any state.
    pub fn restart(&mut self) {
        tracing::debug!(
            index = self.current,
            score = self.score,
            completed = self.is_complete(),
            "quiz restarted"
        );
        self.current = 0;
        self.score = 0;
        self.state = SessionState::Answering;
    }

    fn reject<T>(&self, err: SessionError) -> Result<T, SessionError> {
        tracing::warn!(index = self.current, phase = ?self.phase(), error = %err, "transition rejected");
        Err(err)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("state", &self.state)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::AnswerOption;

    fn question(id: &str, answer: &str, options: &[&str]) -> Question {
        Question::new(
            id,
            format!("Question {id}"),
            answer,
            format!("Explanation for {id}"),
            options
                .iter()
                .map(|option| AnswerOption::new(*option, option.to_uppercase()))
                .collect(),
        )
        .unwrap()
    }

    fn two_question_bank() -> Arc<QuestionBank> {
        Arc::new(
            QuestionBank::new(vec![
                question("q1", "a", &["a", "b"]),
                question("q2", "x", &["x", "y"]),
            ])
            .unwrap(),
        )
    }

    fn assert_invariants(session: &QuizSession) {
        assert!(session.score() <= session.progress().answered);
        assert!(session.current_index() <= session.bank_len());
        assert_eq!(session.is_complete(), session.current_index() == session.bank_len());
        assert_eq!(session.is_revealed(), session.last_correct().is_some());
    }

    #[test]
    fn new_session_starts_unrevealed_at_first_question() {
        let session = QuizSession::new(two_question_bank());

        assert_eq!(session.phase(), SessionPhase::Answering);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), None);
        assert_eq!(session.last_correct(), None);
        assert_eq!(session.current_question().unwrap().id().as_str(), "q1");
        assert_invariants(&session);
    }

    #[test]
    fn walkthrough_scores_one_of_two() {
        let mut session = QuizSession::new(two_question_bank());

        let outcome = session.submit_answer("a").unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);
        assert!(session.is_revealed());
        assert_eq!(session.last_correct(), Some(true));
        assert_eq!(session.selected_answer(), Some(&OptionId::new("a")));
        assert_invariants(&session);

        assert_eq!(session.advance().unwrap(), AdvanceOutcome::Next { index: 1 });
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_revealed());
        assert_eq!(session.selected_answer(), None);
        assert_invariants(&session);

        let outcome = session.submit_answer("y").unwrap();
        assert!(!outcome.correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.last_correct(), Some(false));
        assert_invariants(&session);

        let done = session.advance().unwrap();
        assert_eq!(done, AdvanceOutcome::Completed(Score::new(1, 2)));
        assert!(session.is_complete());
        assert_eq!(session.final_score(), Some(Score::new(1, 2)));
        assert!(session.current_question().is_none());
        assert_invariants(&session);
    }

    #[test]
    fn submit_is_rejected_once_revealed() {
        let mut session = QuizSession::new(two_question_bank());
        session.submit_answer("b").unwrap();

        for attempt in ["a", "b", "", "zzz"] {
            assert_eq!(
                session.submit_answer(attempt).unwrap_err(),
                SessionError::AlreadyRevealed
            );
        }
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), Some(&OptionId::new("b")));
        assert_eq!(session.last_correct(), Some(false));
    }

    #[test]
    fn empty_selection_is_rejected_without_change() {
        let mut session = QuizSession::new(two_question_bank());
        let err = session.submit_answer("").unwrap_err();

        assert_eq!(err, SessionError::NoSelection);
        assert!(err.is_invalid_transition());
        assert_eq!(session.phase(), SessionPhase::Answering);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn unknown_option_is_rejected_without_change() {
        let mut session = QuizSession::new(two_question_bank());

        // "x" belongs to the second question, and "A" differs only by case.
        for attempt in ["x", "A"] {
            assert_eq!(
                session.submit_answer(attempt).unwrap_err(),
                SessionError::UnknownOption {
                    option_id: OptionId::new(attempt)
                }
            );
        }
        assert_eq!(session.phase(), SessionPhase::Answering);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn advance_requires_reveal() {
        let mut session = QuizSession::new(two_question_bank());

        assert_eq!(session.advance().unwrap_err(), SessionError::NotRevealed);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn completed_session_rejects_everything_but_restart() {
        let mut session = QuizSession::new(two_question_bank());
        session.submit_answer("a").unwrap();
        session.advance().unwrap();
        session.submit_answer("x").unwrap();
        session.advance().unwrap();
        assert_eq!(session.final_score(), Some(Score::new(2, 2)));

        assert_eq!(session.submit_answer("x").unwrap_err(), SessionError::Completed);
        assert_eq!(session.advance().unwrap_err(), SessionError::Completed);
        assert_eq!(session.score(), 2);
        assert_eq!(session.current_index(), 2);

        session.restart();
        assert_eq!(session.phase(), SessionPhase::Answering);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_invariants(&session);
    }

    #[test]
    fn restart_mid_session_abandons_progress() {
        let mut session = QuizSession::new(two_question_bank());
        session.submit_answer("a").unwrap();

        session.restart();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.is_revealed());
        assert_eq!(session.selected_answer(), None);
        assert_eq!(session.last_correct(), None);
    }

    #[test]
    fn single_question_bank_completes_after_one_advance() {
        let bank = Arc::new(QuestionBank::new(vec![question("only", "a", &["a"])]).unwrap());
        let mut session = QuizSession::new(bank);

        session.submit_answer("a").unwrap();
        assert_eq!(
            session.advance().unwrap(),
            AdvanceOutcome::Completed(Score::new(1, 1))
        );
    }

    #[test]
    fn progress_tracks_position_and_answers() {
        let mut session = QuizSession::new(two_question_bank());
        let start = session.progress();
        assert_eq!((start.position, start.total, start.answered), (1, 2, 0));

        session.submit_answer("a").unwrap();
        let revealed = session.progress();
        assert_eq!((revealed.position, revealed.answered, revealed.score), (1, 1, 1));

        session.advance().unwrap();
        session.submit_answer("x").unwrap();
        session.advance().unwrap();
        let done = session.progress();
        assert_eq!((done.position, done.answered, done.remaining()), (2, 2, 0));
        assert!(done.is_complete);
    }

    #[test]
    fn snapshot_exposes_reveal_then_completion() {
        let mut session = QuizSession::new(two_question_bank());

        let SessionSnapshot::Active(active) = session.snapshot().unwrap() else {
            panic!("expected active snapshot");
        };
        assert_eq!((active.number, active.total), (1, 2));
        assert!(active.reveal.is_none());

        session.submit_answer("b").unwrap();
        let SessionSnapshot::Active(active) = session.snapshot().unwrap() else {
            panic!("expected active snapshot");
        };
        assert_eq!(
            active.reveal,
            Some(Reveal {
                selected: OptionId::new("b"),
                correct: false
            })
        );
        assert_eq!(active.explanation(), Some("Explanation for q1"));

        session.advance().unwrap();
        session.submit_answer("x").unwrap();
        session.advance().unwrap();
        assert_eq!(
            session.snapshot().unwrap(),
            SessionSnapshot::Completed {
                score: Score::new(1, 2)
            }
        );
    }
}
