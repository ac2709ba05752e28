use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use academy_core::model::{Percent, QuestionBank, TopicSelector};

use super::plan::QuizPlanBuilder;
use super::session::{QuizSession, QuizState};
use super::view::{AdvanceOutcome, AnswerFeedback, MissedQuestion, QuestionView, ResultView};
use crate::Clock;
use crate::error::QuizError;
use crate::score_service::ScoreRecorder;

/// Drives one quiz at a time for a front end.
///
/// Owns the session, draws questions, and records the best score when the
/// last question is passed. Everything it hands out is a plain view struct.
pub struct QuizLoopService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    recorder: ScoreRecorder,
    rng: StdRng,
    session_size: Option<usize>,
    session: QuizSession,
    started_at: Option<DateTime<Utc>>,
    result: Option<ResultView>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>, recorder: ScoreRecorder) -> Self {
        Self {
            clock,
            bank,
            recorder,
            rng: StdRng::from_os_rng(),
            session_size: None,
            session: QuizSession::new(),
            started_at: None,
            result: None,
        }
    }

    /// Deterministic question order, for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Override the number of questions drawn for a single topic.
    #[must_use]
    pub fn with_session_size(mut self, size: usize) -> Self {
        self.session_size = Some(size);
        self
    }

    /// Start a fresh quiz, discarding any quiz in progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the bank cannot supply the questions for
    /// `selector`; the previous session is kept in that case.
    pub fn start(&mut self, selector: TopicSelector) -> Result<QuestionView, QuizError> {
        let mut builder = QuizPlanBuilder::new(&self.bank);
        if let Some(size) = self.session_size {
            builder = builder.with_session_size(size);
        }
        let plan = builder.build(selector, &mut self.rng)?;
        let total = plan.total();

        self.session.start(plan)?;
        self.started_at = Some(self.clock.now());
        self.result = None;
        tracing::info!(%selector, total, "quiz started");

        self.current_question_view()
    }

    /// Start from a topic key as used by the site (`"python"`, `"ml"`, `"mix"`).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Bank` for an unknown key, otherwise as [`Self::start`].
    pub fn start_key(&mut self, key: &str) -> Result<QuestionView, QuizError> {
        let selector: TopicSelector = key.parse()?;
        self.start(selector)
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    /// `"question {n} / {total}"` while a quiz is running.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        self.session
            .is_active()
            .then(|| self.session.progress().label(self.session.position()))
    }

    /// # Errors
    ///
    /// Returns `QuizError::SessionNotActive` when no question is on screen.
    pub fn current_question_view(&self) -> Result<QuestionView, QuizError> {
        let question = self.session.current_question()?;
        Ok(QuestionView::new(
            question,
            self.session.position(),
            self.session.total(),
        ))
    }

    /// Answer the question on screen. Repeated submissions return the first
    /// feedback unchanged.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SessionNotActive` when no question is on screen.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerFeedback, QuizError> {
        let outcome = self.session.answer(selected)?.clone();
        Ok(AnswerFeedback::from_outcome(&outcome, self.session.score()))
    }

    /// Move to the next question, or finish the quiz and record the score.
    ///
    /// A storage failure while recording is logged and reflected in the
    /// result view; it never fails the call.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` or `QuizError::SessionNotActive` as
    /// [`QuizSession::advance`] does.
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        let state = self.session.advance()?;
        if state != QuizState::Completed {
            return Ok(AdvanceOutcome { done: false });
        }

        self.result = Some(self.finish().await);
        Ok(AdvanceOutcome { done: true })
    }

    /// Result of the last completed quiz.
    #[must_use]
    pub fn result_view(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    /// Incorrectly answered questions of the current or last quiz, in order.
    #[must_use]
    pub fn missed_questions(&self) -> Vec<MissedQuestion> {
        let questions = self.session.questions();
        self.session
            .history()
            .iter()
            .filter(|outcome| !outcome.correct)
            .filter_map(|outcome| {
                let question = questions.get(outcome.position)?;
                Some(MissedQuestion {
                    prompt: question.prompt().to_owned(),
                    selected: outcome.selected,
                    correct_option: question.correct_option().to_owned(),
                    explanation: outcome.explanation.clone(),
                })
            })
            .collect()
    }

    /// Back to topic selection.
    pub fn reset(&mut self) {
        self.session.reset();
        self.started_at = None;
        self.result = None;
    }

    async fn finish(&self) -> ResultView {
        let score = self.session.score();
        let total = self.session.total();
        let percent = self
            .session
            .final_percent()
            .unwrap_or_else(|| Percent::from_score(score, total));
        let completed_at = self.clock.now();
        let started_at = self.started_at.unwrap_or(completed_at);

        let (is_new_best, best) = match self.recorder.record(percent).await {
            Ok(outcome) => (outcome.improved, Some(outcome.best)),
            Err(err) => {
                tracing::warn!(error = %err, %percent, "failed to record best score");
                (false, None)
            }
        };

        let tier = percent.tier();
        tracing::info!(
            score,
            total,
            %percent,
            tier = tier.key(),
            is_new_best,
            elapsed_secs = self.clock.elapsed(started_at).num_seconds(),
            "quiz completed"
        );

        ResultView {
            score,
            total,
            percent,
            tier,
            tier_message: tier.message(),
            is_new_best,
            best,
            started_at,
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::{Tier, Topic};
    use academy_core::time::fixed_now;
    use storage::repository::InMemoryStore;

    fn service() -> QuizLoopService {
        QuizLoopService::new(
            Clock::fixed(fixed_now()),
            Arc::new(QuestionBank::builtin()),
            ScoreRecorder::new(Arc::new(InMemoryStore::new())),
        )
        .with_seed(7)
    }

    #[test]
    fn start_shows_first_question() {
        let mut svc = service();
        let view = svc.start(TopicSelector::Single(Topic::Python)).unwrap();
        assert_eq!(view.position, 0);
        assert_eq!(view.total, 20);
        assert_eq!(svc.progress_label().as_deref(), Some("question 1 / 20"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut svc = service();
        assert!(matches!(svc.start_key("rust"), Err(QuizError::Bank(_))));
        assert_eq!(svc.state(), QuizState::NotStarted);
        assert!(svc.progress_label().is_none());
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = service();
        let mut b = service();
        let first = a.start_key("mix").unwrap();
        let second = b.start_key("mix").unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn wrong_answers_are_listed_for_review() {
        let mut svc = service().with_session_size(3);
        svc.start(TopicSelector::Single(Topic::MachineLearning))
            .unwrap();

        while svc.state() != QuizState::Completed {
            let correct = svc.session().current_question().unwrap().correct_index();
            let wrong = (correct + 1) % 4;
            svc.submit_answer(wrong).unwrap();
            svc.advance().await.unwrap();
        }

        let missed = svc.missed_questions();
        assert_eq!(missed.len(), 3);
        let result = svc.result_view().unwrap();
        assert_eq!(result.percent, Percent::ZERO);
        assert_eq!(result.tier, Tier::Retry);
        assert_eq!(result.started_at, fixed_now());
    }

    #[tokio::test]
    async fn reset_clears_result() {
        let mut svc = service().with_session_size(1);
        svc.start_key("python").unwrap();
        svc.submit_answer(0).unwrap();
        assert!(svc.advance().await.unwrap().done);
        assert!(svc.result_view().is_some());

        svc.reset();
        assert!(svc.result_view().is_none());
        assert_eq!(svc.state(), QuizState::NotStarted);
    }
}
