use std::sync::Arc;

use academy_core::model::Theme;
use storage::repository::{KeyValueStore, keys};

/// Loads and persists the colour scheme.
///
/// Storage failures are logged and never surface to the caller; the visual
/// switch works even when nothing can be saved.
#[derive(Clone)]
pub struct ThemeService {
    store: Arc<dyn KeyValueStore>,
}

impl ThemeService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored theme, `Light` if missing, unknown or unreadable.
    pub async fn load(&self) -> Theme {
        match self.store.get(keys::THEME).await {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme, using light");
                Theme::default()
            }
        }
    }

    pub async fn set(&self, theme: Theme) {
        if let Err(err) = self.store.set(keys::THEME, theme.as_str()).await {
            tracing::warn!(error = %err, %theme, "failed to persist theme");
        } else {
            tracing::debug!(%theme, "theme saved");
        }
    }

    /// Switch away from `current`, persist and return the new theme.
    pub async fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.set(next).await;
        next
    }
}
