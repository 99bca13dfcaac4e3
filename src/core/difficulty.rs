//! Difficulty tiers
//!
//! Each tier fixes the initial attempt budget for a session. The numeric
//! encoding of a tier is its budget, which is also what the score file stores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named difficulty tier with a fixed attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Error type for numeric encodings that match no tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub u32);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No difficulty tier has encoding {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl Difficulty {
    /// All tiers in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Initial attempt budget for a session at this tier
    #[inline]
    #[must_use]
    pub const fn budget(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 5,
            Self::Hard => 3,
        }
    }

    /// Parse a difficulty menu choice
    ///
    /// Recognizes `"1"`, `"2"`, `"3"`; returns `None` for anything else so the
    /// caller can apply the Medium fallback.
    ///
    /// # Examples
    /// ```
    /// use high_low::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_choice("1"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_choice("seven"), None);
    /// ```
    #[must_use]
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Easy),
            "2" => Some(Self::Medium),
            "3" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl From<Difficulty> for u32 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.budget()
    }
}

impl TryFrom<u32> for Difficulty {
    type Error = UnknownTier;

    fn try_from(encoding: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.budget() == encoding)
            .ok_or(UnknownTier(encoding))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}
