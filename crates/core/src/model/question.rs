use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every question offers exactly this many choices.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("expected 4 options, got {len}")]
    WrongOptionCount { len: usize },

    #[error("correct index {index} is outside 0..4")]
    CorrectIndexOutOfRange { index: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Questions are immutable once built; sessions hold clones and never edit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_index: u8,
    explanation: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, or if
    /// `correct_index` does not point at one of the options.
    pub fn new(
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        let correct_index = u8::try_from(correct_index)
            .ok()
            .filter(|idx| usize::from(*idx) < OPTION_COUNT)
            .ok_or(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
            })?;

        Ok(Self {
            prompt,
            options,
            correct_index,
            explanation: explanation.into().trim().to_owned(),
        })
    }

    /// Builds a question from the compiled-in bank. The builtin table is
    /// checked against [`Question::new`] by the bank tests.
    pub(crate) fn from_static(
        prompt: &str,
        options: [&str; OPTION_COUNT],
        correct_index: u8,
        explanation: &str,
    ) -> Self {
        Self {
            prompt: prompt.to_owned(),
            options: options.map(str::to_owned),
            correct_index,
            explanation: explanation.to_owned(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        usize::from(self.correct_index)
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index()]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// True when `selected` is the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index()
    }
}

/// Wire shape of a question in a JSON bank.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let len = record.options.len();
        let options: [String; OPTION_COUNT] = record
            .options
            .try_into()
            .map_err(|_| QuestionError::WrongOptionCount { len })?;
        Self::new(
            record.prompt,
            options,
            record.correct_index,
            record.explanation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> [String; OPTION_COUNT] {
        ["a", "b", "c", "d"].map(str::to_owned)
    }

    #[test]
    fn new_trims_and_keeps_fields() {
        let q = Question::new("  What?  ", opts(), 2, " because ").unwrap();
        assert_eq!(q.prompt(), "What?");
        assert_eq!(q.correct_index(), 2);
        assert_eq!(q.correct_option(), "c");
        assert_eq!(q.explanation(), "because");
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn rejects_blank_prompt() {
        let err = Question::new("   ", opts(), 0, "").unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn rejects_blank_option() {
        let mut options = opts();
        options[3] = " ".into();
        let err = Question::new("Q", options, 0, "").unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 3 });
    }

    #[test]
    fn rejects_correct_index_past_options() {
        let err = Question::new("Q", opts(), 4, "").unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 4 });
    }

    #[test]
    fn record_with_three_options_is_rejected() {
        let record = QuestionRecord {
            prompt: "Q".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_index: 0,
            explanation: String::new(),
        };
        let err = Question::try_from(record).unwrap_err();
        assert_eq!(err, QuestionError::WrongOptionCount { len: 3 });
    }
}
