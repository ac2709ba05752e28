use std::fmt;

use academy_core::model::{Percent, Question, TopicSelector};

use super::plan::QuizPlan;
use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    /// Showing the current question, waiting for an answer.
    InProgress,
    /// The current question was answered; waiting for `advance`.
    AwaitingNext,
    Completed,
}

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub position: usize,
    pub selected: usize,
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: String,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run: a fixed question list, a cursor and a running score.
///
/// `score <= answered <= total` holds after every operation, and `score`
/// moves at most once per question.
pub struct QuizSession {
    selector: Option<TopicSelector>,
    questions: Vec<Question>,
    position: usize,
    score: usize,
    state: QuizState,
    history: Vec<AnswerOutcome>,
    final_percent: Option<Percent>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selector: None,
            questions: Vec::new(),
            position: 0,
            score: 0,
            state: QuizState::NotStarted,
            history: Vec::new(),
            final_percent: None,
        }
    }

    /// Replace whatever was running with the drawn `plan`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if the plan has no questions; the
    /// session is left untouched in that case.
    pub fn start(&mut self, plan: QuizPlan) -> Result<(), QuizError> {
        if plan.is_empty() {
            return Err(QuizError::EmptyBank {
                selector: plan.selector,
            });
        }

        self.selector = Some(plan.selector);
        self.questions = plan.questions;
        self.position = 0;
        self.score = 0;
        self.history.clear();
        self.final_percent = None;
        self.state = QuizState::InProgress;
        tracing::debug!(selector = %plan.selector, total = self.questions.len(), "quiz session started");
        Ok(())
    }

    /// Drop the current run and return to `NotStarted`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn selector(&self) -> Option<TopicSelector> {
        self.selector
    }

    /// Index of the question being shown (equals `total` once completed).
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, QuizState::InProgress | QuizState::AwaitingNext)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Completed
    }

    #[must_use]
    pub fn history(&self) -> &[AnswerOutcome] {
        &self.history
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// `round(100 * score / total)`, available once completed.
    #[must_use]
    pub fn final_percent(&self) -> Option<Percent> {
        self.final_percent
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total(),
            answered: self.answered(),
            remaining: self.total().saturating_sub(self.answered()),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// The question at the cursor.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SessionNotActive` outside `InProgress`/`AwaitingNext`.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        if !self.is_active() {
            return Err(QuizError::SessionNotActive);
        }
        self.questions
            .get(self.position)
            .ok_or(QuizError::SessionNotActive)
    }

    /// The outcome for the question at the cursor, if already answered.
    #[must_use]
    pub fn last_answer(&self) -> Option<&AnswerOutcome> {
        match self.state {
            QuizState::AwaitingNext => self.history.last(),
            _ => None,
        }
    }

    /// Answer the current question.
    ///
    /// A second call before `advance` returns the first outcome and leaves
    /// the score alone.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SessionNotActive` before start or after completion.
    pub fn answer(&mut self, selected: usize) -> Result<&AnswerOutcome, QuizError> {
        match self.state {
            QuizState::InProgress => {}
            QuizState::AwaitingNext => {
                return self.history.last().ok_or(QuizError::SessionNotActive);
            }
            QuizState::NotStarted | QuizState::Completed => {
                return Err(QuizError::SessionNotActive);
            }
        }

        let question = self.current_question()?;
        let correct = question.is_correct(selected);
        let outcome = AnswerOutcome {
            position: self.position,
            selected,
            correct,
            correct_index: question.correct_index(),
            explanation: question.explanation().to_owned(),
        };

        if correct {
            self.score += 1;
        }
        self.history.push(outcome);
        self.state = QuizState::AwaitingNext;
        tracing::debug!(
            position = self.position,
            correct,
            score = self.score,
            "question answered"
        );

        self.history.last().ok_or(QuizError::SessionNotActive)
    }

    /// Move past an answered question; completes the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` while the current question is still
    /// open and `QuizError::SessionNotActive` before start or after completion.
    pub fn advance(&mut self) -> Result<QuizState, QuizError> {
        match self.state {
            QuizState::AwaitingNext => {}
            QuizState::InProgress => return Err(QuizError::NotAnswered),
            QuizState::NotStarted | QuizState::Completed => {
                return Err(QuizError::SessionNotActive);
            }
        }

        self.position += 1;
        if self.position >= self.questions.len() {
            let percent = Percent::from_score(self.score, self.questions.len());
            self.final_percent = Some(percent);
            self.state = QuizState::Completed;
            tracing::debug!(score = self.score, %percent, "quiz session completed");
        } else {
            self.state = QuizState::InProgress;
        }
        Ok(self.state)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("selector", &self.selector)
            .field("questions_len", &self.questions.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("state", &self.state)
            .field("final_percent", &self.final_percent)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
