use crate::error::ModelError;

/// A star rating in `0..=5`; zero means "unrated".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Highest star value a card can hold.
    pub const MAX: u8 = 5;

    /// The "no rating yet" value. Unrated cards are excluded from the
    /// aggregate count and from submission.
    pub const UNRATED: Rating = Rating(0);

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if value > Self::MAX {
            return Err(ModelError::InvalidRating(format!(
                "{value} is outside 0..={}",
                Self::MAX
            )));
        }
        Ok(Rating(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::UNRATED
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
