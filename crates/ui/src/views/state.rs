use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The session broke one of its own invariants; the quiz cannot continue.
    Corrupted,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Corrupted => "The quiz hit an internal error and cannot continue.",
        }
    }

    pub(crate) fn from_session(err: SessionError) -> Self {
        tracing::error!(error = %err, "quiz session failed");
        Self::Corrupted
    }
}
