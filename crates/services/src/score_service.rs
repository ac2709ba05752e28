use std::sync::Arc;

use academy_core::model::Percent;
use storage::repository::{KeyValueStore, StorageError, keys};

/// Result of recording a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Best percentage after this record.
    pub best: Percent,
    /// Whether this record replaced the stored best.
    pub improved: bool,
}

/// Persists the highest quiz percentage ever achieved.
#[derive(Clone)]
pub struct ScoreRecorder {
    store: Arc<dyn KeyValueStore>,
}

impl ScoreRecorder {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current best, or `None` if nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn best(&self) -> Result<Option<Percent>, StorageError> {
        let raw = self.store.get(keys::BEST_SCORE).await?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let parsed = Percent::parse_stored(&raw);
        if parsed.is_none() {
            tracing::warn!(value = %raw, "ignoring unparsable stored best score");
        }
        Ok(parsed)
    }

    /// Record `percent`, replacing the stored best only when strictly higher.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    pub async fn record(&self, percent: Percent) -> Result<RecordOutcome, StorageError> {
        let stored = self.best().await?.unwrap_or(Percent::ZERO);
        if percent <= stored {
            tracing::debug!(%percent, best = %stored, "best score unchanged");
            return Ok(RecordOutcome {
                best: stored,
                improved: false,
            });
        }

        self.store
            .set(keys::BEST_SCORE, &percent.value().to_string())
            .await?;
        tracing::info!(%percent, previous = %stored, "new best score");
        Ok(RecordOutcome {
            best: percent,
            improved: true,
        })
    }
}
