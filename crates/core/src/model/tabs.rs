use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TabError {
    #[error("a tab set needs at least one tab")]
    Empty,

    #[error("duplicate tab id: {0}")]
    Duplicate(String),

    #[error("unknown tab: {0}")]
    UnknownTab(String),
}

/// A group of tab buttons/panels with exactly one active member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: usize,
}

impl TabSet {
    /// Build a tab set; the first id starts active.
    ///
    /// # Errors
    ///
    /// Returns `TabError::Empty` for no ids and `TabError::Duplicate` when an id repeats.
    pub fn new<I, S>(ids: I) -> Result<Self, TabError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if collected.contains(&id) {
                return Err(TabError::Duplicate(id));
            }
            collected.push(id);
        }
        if collected.is_empty() {
            return Err(TabError::Empty);
        }
        Ok(Self {
            ids: collected,
            active: 0,
        })
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.ids[self.active]
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Activate `id`. Unknown ids leave the current tab active.
    ///
    /// # Errors
    ///
    /// Returns `TabError::UnknownTab` if `id` is not part of the set.
    pub fn switch_to(&mut self, id: &str) -> Result<&str, TabError> {
        let index = self
            .ids
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| TabError::UnknownTab(id.to_owned()))?;
        self.active = index;
        Ok(self.active())
    }
}
