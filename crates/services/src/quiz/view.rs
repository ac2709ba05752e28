use chrono::{DateTime, Utc};
use serde::Serialize;

use academy_core::model::{OPTION_COUNT, Percent, Question, Tier};

use super::session::AnswerOutcome;

/// What the front end renders for the question on screen.
///
/// Presentation-agnostic: option order is the stored order, labelling
/// (A/B/C/D, buttons, ...) is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub position: usize,
    pub total: usize,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
}

impl QuestionView {
    #[must_use]
    pub fn new(question: &Question, position: usize, total: usize) -> Self {
        Self {
            position,
            total,
            prompt: question.prompt().to_owned(),
            options: question.options().clone(),
        }
    }
}

/// Feedback after submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: String,
    /// Running score after this answer.
    pub score: usize,
}

impl AnswerFeedback {
    #[must_use]
    pub fn from_outcome(outcome: &AnswerOutcome, score: usize) -> Self {
        Self {
            selected: outcome.selected,
            correct: outcome.correct,
            correct_index: outcome.correct_index,
            explanation: outcome.explanation.clone(),
            score,
        }
    }
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvanceOutcome {
    pub done: bool,
}

/// Final screen of a completed quiz.
///
/// `best` is `None` when the best score could not be read or written; in that
/// case `is_new_best` is always `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
    pub percent: Percent,
    pub tier: Tier,
    pub tier_message: &'static str,
    pub is_new_best: bool,
    pub best: Option<Percent>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// A question answered incorrectly, for the review list under the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissedQuestion {
    pub prompt: String,
    pub selected: usize,
    pub correct_option: String,
    pub explanation: String,
}
