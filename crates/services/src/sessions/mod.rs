mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{AdvanceOutcome, QuizSession, Reveal, SessionPhase, SubmitOutcome};
pub use view::{ActiveQuestion, SessionSnapshot};
pub use workflow::QuizService;
