use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tag the backend attaches to each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl CardDifficulty {
    /// Lenient parse; anything unrecognized is treated as medium.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for CardDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: u64,
    pub front: String,
    pub back: String,
    pub difficulty: CardDifficulty,
}

impl Flashcard {
    #[must_use]
    pub fn new(
        id: u64,
        front: impl Into<String>,
        back: impl Into<String>,
        difficulty: CardDifficulty,
    ) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
            difficulty,
        }
    }
}
