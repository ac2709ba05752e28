use std::fmt;

use serde::{Deserialize, Serialize};

/// A whole-number percentage in `0..=100`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Clamps anything above 100 down to 100.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// `round(100 * score / total)` with halves rounded up.
    ///
    /// A zero `total` yields zero. `score` above `total` is clamped to 100.
    #[must_use]
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let score = score.min(total) as u128;
        let total = total as u128;
        let rounded = (200 * score + total) / (2 * total);
        Self(u8::try_from(rounded).unwrap_or(100).min(100))
    }

    /// Lenient parse of a persisted value; accepts `"85"` and `"85.0"`.
    #[must_use]
    pub fn parse_stored(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<u8>() {
            return Some(Self::new(value));
        }
        let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
        if value < 0.0 {
            return None;
        }
        Some(Self::new(value.round().min(100.0) as u8))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn tier(self) -> Tier {
        Tier::from_percent(self)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Feedback bucket for a final percentage.
///
/// Lower bounds are inclusive, upper bounds exclusive; `Perfect` needs exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Perfect,
    Excellent,
    Good,
    NeedsReview,
    Retry,
}

impl Tier {
    #[must_use]
    pub fn from_percent(percent: Percent) -> Self {
        match percent.value() {
            100 => Tier::Perfect,
            85..=99 => Tier::Excellent,
            70..=84 => Tier::Good,
            50..=69 => Tier::NeedsReview,
            _ => Tier::Retry,
        }
    }

    /// Stable identifier for the tier.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::NeedsReview => "needs review",
            Tier::Retry => "retry",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Tier::Perfect => "Amazing! You're a genius 🏆",
            Tier::Excellent => "Excellent work! 🌟",
            Tier::Good => "Very good, keep going! 👍",
            Tier::NeedsReview => "Good, but worth a review 📚",
            Tier::Retry => "No worries, try again! 💪",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
