/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// One-based label for the question on screen, e.g. `"question 3 / 20"`.
    ///
    /// `position` is the zero-based cursor of the session.
    #[must_use]
    pub fn label(&self, position: usize) -> String {
        let shown = (position + 1).min(self.total.max(1));
        format!("question {shown} / {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based_and_clamped() {
        let progress = QuizProgress {
            total: 20,
            answered: 0,
            remaining: 20,
            score: 0,
            is_complete: false,
        };
        assert_eq!(progress.label(0), "question 1 / 20");
        assert_eq!(progress.label(19), "question 20 / 20");
        assert_eq!(progress.label(20), "question 20 / 20");
    }
}
