//! Board domain messages.

use cinerate_model::{CardID, Rating};

/// Board domain messages.
#[derive(Debug, Clone)]
pub enum Message {
    // User actions
    /// Click on a star slot of a card.
    StarClicked { card: CardID, value: Rating },
    /// Click on a card's poster.
    PosterClicked { card: CardID },
    /// Click on the promotion control of the current search result.
    PromoteRequested,
    /// Submit the rating form.
    SubmitRequested,
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StarClicked { .. } => "StarClicked",
            Self::PosterClicked { .. } => "PosterClicked",
            Self::PromoteRequested => "PromoteRequested",
            Self::SubmitRequested => "SubmitRequested",
        }
    }
}
