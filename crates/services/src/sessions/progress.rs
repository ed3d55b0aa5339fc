use quiz_core::model::Score;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen ("i of N"); equals `total` once complete.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    #[must_use]
    pub fn running_score(&self) -> Score {
        Score::new(self.score, self.answered)
    }
}
