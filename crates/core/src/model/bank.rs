use std::collections::BTreeMap;

use thiserror::Error;

use super::builtin;
use super::question::{Question, QuestionError, QuestionRecord};
use super::topic::Topic;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("invalid question #{index} in topic {topic}: {source}")]
    InvalidQuestion {
        topic: Topic,
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// Read-only question collection grouped by topic.
///
/// Built once at startup and shared; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    topics: BTreeMap<Topic, Vec<Question>>,
}

impl QuestionBank {
    /// The bank compiled into the binary: 20 questions per topic.
    #[must_use]
    pub fn builtin() -> Self {
        let mut topics = BTreeMap::new();
        topics.insert(Topic::Python, build(&builtin::PYTHON));
        topics.insert(Topic::MachineLearning, build(&builtin::MACHINE_LEARNING));
        Self { topics }
    }

    /// Build a bank from already-validated questions.
    #[must_use]
    pub fn from_topics(topics: impl IntoIterator<Item = (Topic, Vec<Question>)>) -> Self {
        Self {
            topics: topics.into_iter().collect(),
        }
    }

    /// Parse a JSON bank of the form `{"python": [...], "ml": [...]}`.
    ///
    /// Each entry is `{"prompt", "options", "correct_index", "explanation"}`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON, `BankError::UnknownTopic`
    /// for a topic key outside the known set, and `BankError::InvalidQuestion`
    /// for an entry that fails validation.
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let parsed: BTreeMap<String, Vec<QuestionRecord>> = serde_json::from_str(raw)?;

        let mut topics = BTreeMap::new();
        for (key, records) in parsed {
            let topic: Topic = key.parse()?;
            let questions = records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    Question::try_from(record).map_err(|source| BankError::InvalidQuestion {
                        topic,
                        index,
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            topics.insert(topic, questions);
        }

        Ok(Self { topics })
    }

    /// Questions for a topic key.
    ///
    /// # Errors
    ///
    /// Returns `BankError::UnknownTopic` if `key` is not a concrete topic.
    /// The virtual mixed selector is not a bank key.
    pub fn get(&self, key: &str) -> Result<&[Question], BankError> {
        let topic: Topic = key.parse()?;
        Ok(self.questions(topic))
    }

    /// Questions for a topic; empty if the bank carries none.
    #[must_use]
    pub fn questions(&self, topic: Topic) -> &[Question] {
        self.topics.get(&topic).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self, topic: Topic) -> usize {
        self.questions(topic).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.values().all(Vec::is_empty)
    }
}

fn build(entries: &[builtin::Entry]) -> Vec<Question> {
    entries
        .iter()
        .map(|&(prompt, options, correct, explanation)| {
            Question::from_static(prompt, options, correct, explanation)
        })
        .collect()
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_twenty_per_topic() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(Topic::Python), 20);
        assert_eq!(bank.len(Topic::MachineLearning), 20);
        assert!(!bank.is_empty());
    }

    #[test]
    fn builtin_questions_pass_validation() {
        let bank = QuestionBank::builtin();
        for topic in Topic::ALL {
            for q in bank.questions(topic) {
                let rebuilt = Question::new(
                    q.prompt(),
                    q.options().clone(),
                    q.correct_index(),
                    q.explanation(),
                )
                .unwrap();
                assert_eq!(&rebuilt, q);
            }
        }
    }

    #[test]
    fn get_by_key() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.get("python").unwrap().len(), 20);
        assert_eq!(bank.get("ml").unwrap().len(), 20);
    }

    #[test]
    fn get_unknown_or_mixed_key_fails() {
        let bank = QuestionBank::builtin();
        assert!(matches!(bank.get("rust"), Err(BankError::UnknownTopic(_))));
        assert!(matches!(bank.get("mix"), Err(BankError::UnknownTopic(_))));
    }

    #[test]
    fn from_json_loads_and_validates() {
        let raw = r#"{
            "python": [
                {"prompt": "Q1", "options": ["a", "b", "c", "d"], "correct_index": 1, "explanation": "b"}
            ]
        }"#;
        let bank = QuestionBank::from_json(raw).unwrap();
        assert_eq!(bank.len(Topic::Python), 1);
        assert_eq!(bank.len(Topic::MachineLearning), 0);
        assert_eq!(bank.questions(Topic::Python)[0].correct_option(), "b");
    }

    #[test]
    fn from_json_rejects_unknown_topic() {
        let raw = r#"{"go": []}"#;
        let err = QuestionBank::from_json(raw).unwrap_err();
        assert!(matches!(err, BankError::UnknownTopic(key) if key == "go"));
    }

    #[test]
    fn from_json_reports_bad_question_position() {
        let raw = r#"{
            "ml": [
                {"prompt": "ok", "options": ["a", "b", "c", "d"], "correct_index": 0},
                {"prompt": "bad", "options": ["a", "b", "c", "d"], "correct_index": 7}
            ]
        }"#;
        let err = QuestionBank::from_json(raw).unwrap_err();
        assert!(matches!(
            err,
            BankError::InvalidQuestion {
                topic: Topic::MachineLearning,
                index: 1,
                source: QuestionError::CorrectIndexOutOfRange { index: 7 },
            }
        ));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(matches!(
            QuestionBank::from_json("not json"),
            Err(BankError::Parse(_))
        ));
    }
}
