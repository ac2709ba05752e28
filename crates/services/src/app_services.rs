use std::sync::Arc;

use academy_core::model::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz::QuizLoopService;
use crate::score_service::ScoreRecorder;
use crate::theme_service::ThemeService;

/// Assembles app-facing services over one storage backend and question bank.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    bank: Arc<QuestionBank>,
    scores: Arc<ScoreRecorder>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        bank: QuestionBank,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, bank))
    }

    /// Build services over a throwaway in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock, bank: QuestionBank) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, bank)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, bank: QuestionBank) -> Self {
        Self {
            clock,
            bank: Arc::new(bank),
            scores: Arc::new(ScoreRecorder::new(Arc::clone(&storage.kv))),
            theme: Arc::new(ThemeService::new(Arc::clone(&storage.kv))),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// A fresh quiz loop sharing this bank and score store.
    #[must_use]
    pub fn quiz_loop(&self) -> QuizLoopService {
        QuizLoopService::new(self.clock, self.bank(), ScoreRecorder::clone(&self.scores))
    }

    #[must_use]
    pub fn scores(&self) -> Arc<ScoreRecorder> {
        Arc::clone(&self.scores)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}
