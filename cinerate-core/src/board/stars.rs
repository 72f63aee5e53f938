//! Per-card star row and its state machine.

use cinerate_model::{Card, Rating};

/// Interactive star slots per card.
pub const STAR_COUNT: usize = 5;

/// One interactive star slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    /// Rating this slot sets when clicked.
    pub value: u8,
    /// Whether the slot is currently painted.
    pub filled: bool,
}

/// The star slots of one card, highest value first in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRow {
    stars: [Star; STAR_COUNT],
}

impl Default for StarRow {
    fn default() -> Self {
        Self::new()
    }
}

impl StarRow {
    pub fn new() -> Self {
        let mut value = Rating::MAX;
        let stars = [(); STAR_COUNT].map(|_| {
            let star = Star {
                value,
                filled: false,
            };
            value -= 1;
            star
        });
        StarRow { stars }
    }

    /// Row pre-painted for a card that already holds a rating.
    pub fn with_rating(rating: Rating) -> Self {
        let mut row = Self::new();
        row.set_fill(rating);
        row
    }

    /// Repaint so exactly the slots with value ≤ `rating` are filled.
    pub fn set_fill(&mut self, rating: Rating) {
        for star in &mut self.stars {
            star.filled = star.value <= rating.value();
        }
    }

    pub fn filled_count(&self) -> u8 {
        self.stars.iter().filter(|star| star.filled).count() as u8
    }

    pub fn stars(&self) -> &[Star; STAR_COUNT] {
        &self.stars
    }
}

/// Apply a star click at `value`, the fine-grained setter.
///
/// A positive value also selects the card (opening its controls region);
/// zero is the one transition that clears both rating and selection.
pub(crate) fn set_rating(card: &mut Card, row: &mut StarRow, value: Rating) {
    card.rating = value;
    row.set_fill(value);
    card.selected = value.is_rated();
}

/// Apply a poster click, the coarse selection toggle.
///
/// Deselecting an already-selected card clears its rating, exactly as a
/// star click at zero would. Selecting keeps the rating untouched, which
/// is the one window where a card is selected with rating zero.
pub(crate) fn toggle_poster(card: &mut Card, row: &mut StarRow) {
    if card.selected {
        set_rating(card, row, Rating::UNRATED);
    } else {
        card.selected = true;
    }
}
