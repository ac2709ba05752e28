use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bank::BankError;

/// A concrete question category in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "ml")]
    MachineLearning,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Python, Topic::MachineLearning];

    /// Storage/CLI key for the topic.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Topic::Python => "python",
            Topic::MachineLearning => "ml",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Topic::Python => "Python",
            Topic::MachineLearning => "Machine Learning",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" => Ok(Topic::Python),
            "ml" => Ok(Topic::MachineLearning),
            _ => Err(BankError::UnknownTopic(s.to_owned())),
        }
    }
}

/// What a quiz draws from: one topic, or an even mix of every topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicSelector {
    Single(Topic),
    Mixed,
}

impl TopicSelector {
    pub const MIXED_KEY: &'static str = "mix";

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TopicSelector::Single(topic) => topic.key(),
            TopicSelector::Mixed => Self::MIXED_KEY,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            TopicSelector::Single(topic) => topic.title(),
            TopicSelector::Mixed => "Mixed",
        }
    }
}

impl From<Topic> for TopicSelector {
    fn from(topic: Topic) -> Self {
        TopicSelector::Single(topic)
    }
}

impl fmt::Display for TopicSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TopicSelector {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mix" | "mixed" => Ok(TopicSelector::Mixed),
            _ => s.parse().map(TopicSelector::Single),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!("python".parse::<Topic>().unwrap(), Topic::Python);
        assert_eq!(" ML ".parse::<Topic>().unwrap(), Topic::MachineLearning);
        assert_eq!(
            "mix".parse::<TopicSelector>().unwrap(),
            TopicSelector::Mixed
        );
        assert_eq!(
            "mixed".parse::<TopicSelector>().unwrap(),
            TopicSelector::Mixed
        );
        assert_eq!(
            "python".parse::<TopicSelector>().unwrap(),
            TopicSelector::Single(Topic::Python)
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "rust".parse::<TopicSelector>().unwrap_err();
        assert!(matches!(err, BankError::UnknownTopic(key) if key == "rust"));
        assert!("mix".parse::<Topic>().is_err());
    }

    #[test]
    fn key_round_trips_through_display() {
        for topic in Topic::ALL {
            assert_eq!(topic.to_string().parse::<Topic>().unwrap(), topic);
        }
        assert_eq!(TopicSelector::Mixed.to_string(), "mix");
    }
}
