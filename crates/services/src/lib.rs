#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use sessions as session;

pub use error::{QuizLoadError, SessionError};

pub use sessions::{
    ActiveQuestion, AdvanceOutcome, QuizService, QuizSession, Reveal, SessionPhase,
    SessionProgress, SessionSnapshot, SubmitOutcome,
};
