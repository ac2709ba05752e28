#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;
pub mod score_service;
pub mod theme_service;

pub use academy_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizError};
pub use quiz::{
    AdvanceOutcome, AnswerFeedback, MissedQuestion, QuestionView, QuizLoopService, QuizSession,
    QuizState, ResultView,
};
pub use score_service::{RecordOutcome, ScoreRecorder};
pub use theme_service::ThemeService;
