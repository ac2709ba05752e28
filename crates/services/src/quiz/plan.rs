use rand::Rng;

use academy_core::model::{Question, QuestionBank, Topic, TopicSelector};
use academy_core::shuffle::{sample, shuffle_in_place};

use crate::error::QuizError;

/// Questions drawn for a single-topic session.
pub const SESSION_SIZE: usize = 20;
/// Questions drawn from each topic for a mixed session.
pub const MIXED_PER_TOPIC: usize = 10;

/// Ordered questions drawn for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizPlan {
    pub selector: TopicSelector,
    pub questions: Vec<Question>,
}

impl QuizPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Draws a session's questions from the bank without repetition.
pub struct QuizPlanBuilder<'a> {
    bank: &'a QuestionBank,
    session_size: usize,
    mixed_per_topic: usize,
}

impl<'a> QuizPlanBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            session_size: SESSION_SIZE,
            mixed_per_topic: MIXED_PER_TOPIC,
        }
    }

    #[must_use]
    pub fn with_session_size(mut self, size: usize) -> Self {
        self.session_size = size;
        self
    }

    #[must_use]
    pub fn with_mixed_per_topic(mut self, per_topic: usize) -> Self {
        self.mixed_per_topic = per_topic;
        self
    }

    /// Build the question list for `selector`.
    ///
    /// A single topic samples `session_size` questions. Mixed mode samples
    /// `mixed_per_topic` from every topic independently, then shuffles the
    /// combined list so topics interleave.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if a required topic has no questions and
    /// `QuizError::Sample` if a topic has fewer questions than requested.
    pub fn build<R: Rng + ?Sized>(
        self,
        selector: TopicSelector,
        rng: &mut R,
    ) -> Result<QuizPlan, QuizError> {
        let questions = match selector {
            TopicSelector::Single(topic) => {
                let pool = self.pool(topic, selector)?;
                sample(pool, self.session_size, rng)?
            }
            TopicSelector::Mixed => {
                let mut combined = Vec::with_capacity(self.mixed_per_topic * Topic::ALL.len());
                for topic in Topic::ALL {
                    let pool = self.pool(topic, selector)?;
                    combined.extend(sample(pool, self.mixed_per_topic, rng)?);
                }
                shuffle_in_place(&mut combined, rng);
                combined
            }
        };

        if questions.is_empty() {
            return Err(QuizError::EmptyBank { selector });
        }

        Ok(QuizPlan {
            selector,
            questions,
        })
    }

    fn pool(&self, topic: Topic, selector: TopicSelector) -> Result<&'a [Question], QuizError> {
        let pool = self.bank.questions(topic);
        if pool.is_empty() {
            return Err(QuizError::EmptyBank { selector });
        }
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::shuffle::SampleError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn topic_of(bank: &QuestionBank, q: &Question) -> Topic {
        Topic::ALL
            .into_iter()
            .find(|t| bank.questions(*t).contains(q))
            .unwrap()
    }

    fn question(prompt: &str) -> Question {
        Question::new(prompt, ["a", "b", "c", "d"].map(str::to_owned), 0, "").unwrap()
    }

    #[test]
    fn single_topic_draws_whole_topic_without_repeats() {
        let bank = QuestionBank::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let plan = QuizPlanBuilder::new(&bank)
            .build(TopicSelector::Single(Topic::Python), &mut rng)
            .unwrap();

        assert_eq!(plan.total(), 20);
        let prompts: HashSet<_> = plan.questions.iter().map(Question::prompt).collect();
        assert_eq!(prompts.len(), 20);
        assert!(
            plan.questions
                .iter()
                .all(|q| topic_of(&bank, q) == Topic::Python)
        );
    }

    #[test]
    fn mixed_draws_ten_from_each_topic() {
        let bank = QuestionBank::builtin();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = QuizPlanBuilder::new(&bank)
                .build(TopicSelector::Mixed, &mut rng)
                .unwrap();
            assert_eq!(plan.total(), 20);
            let python = plan
                .questions
                .iter()
                .filter(|q| topic_of(&bank, q) == Topic::Python)
                .count();
            assert_eq!(python, 10);
            let prompts: HashSet<_> = plan.questions.iter().map(Question::prompt).collect();
            assert_eq!(prompts.len(), 20);
        }
    }

    #[test]
    fn mixed_interleaves_topics() {
        let bank = QuestionBank::builtin();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = QuizPlanBuilder::new(&bank)
                .build(TopicSelector::Mixed, &mut rng)
                .unwrap();
            let topics: Vec<_> = plan.questions.iter().map(|q| topic_of(&bank, q)).collect();
            let first_half_uniform = topics[..10].iter().all(|t| *t == topics[0]);
            let second_half_uniform = topics[10..].iter().all(|t| *t == topics[10]);
            assert!(
                !(first_half_uniform && second_half_uniform),
                "seed {seed} produced two contiguous topic blocks"
            );
        }
    }

    #[test]
    fn empty_topic_is_rejected() {
        let bank = QuestionBank::from_topics([(Topic::Python, Vec::new())]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = QuizPlanBuilder::new(&bank)
            .build(TopicSelector::Single(Topic::Python), &mut rng)
            .unwrap_err();
        assert!(matches!(err, QuizError::EmptyBank { .. }));

        let err = QuizPlanBuilder::new(&bank)
            .build(TopicSelector::Mixed, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::EmptyBank {
                selector: TopicSelector::Mixed
            }
        ));
    }

    #[test]
    fn short_topic_reports_insufficient_elements() {
        let bank = QuestionBank::from_topics([(Topic::Python, vec![question("q1"), question("q2")])]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = QuizPlanBuilder::new(&bank)
            .build(TopicSelector::Single(Topic::Python), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::Sample(SampleError::InsufficientElements {
                requested: 20,
                available: 2
            })
        ));
    }

    #[test]
    fn custom_sizes_are_honoured() {
        let bank = QuestionBank::builtin();
        let mut rng = StdRng::seed_from_u64(9);
        let plan = QuizPlanBuilder::new(&bank)
            .with_session_size(5)
            .build(TopicSelector::Single(Topic::MachineLearning), &mut rng)
            .unwrap();
        assert_eq!(plan.total(), 5);

        let plan = QuizPlanBuilder::new(&bank)
            .with_mixed_per_topic(3)
            .build(TopicSelector::Mixed, &mut rng)
            .unwrap();
        assert_eq!(plan.total(), 6);
    }
}
