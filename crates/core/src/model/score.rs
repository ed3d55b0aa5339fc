use std::fmt;

/// Final tally of a session: correct answers out of the bank size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    /// `correct` is clamped to `total`.
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct: correct.min(total),
            total,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    /// Percentage of correct answers, rounded to the nearest integer.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let scaled = (self.correct * 200 + self.total) / (self.total * 2);
        u32::try_from(scaled).unwrap_or(100)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}
