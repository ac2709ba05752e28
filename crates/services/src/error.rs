//! Shared error types for the services crate.

use thiserror::Error;

use academy_core::model::{BankError, TopicSelector};
use academy_core::shuffle::SampleError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the quiz session and its workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error("no questions available for {selector}")]
    EmptyBank { selector: TopicSelector },
    #[error("no quiz session in progress")]
    SessionNotActive,
    #[error("answer the current question before moving on")]
    NotAnswered,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
