use thiserror::Error;

use crate::model::{BankError, QuestionError, TabError};
use crate::shuffle::SampleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Tab(#[from] TabError),
}
