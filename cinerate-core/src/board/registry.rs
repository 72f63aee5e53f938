//! Explicit card identity registry.
//!
//! Which card instances are wired, and their star rows. Idempotency lives
//! here as its own set of known ids instead of riding on rendered markup,
//! so a copied card can never inherit a stale initialized marker.

use std::collections::{HashMap, HashSet};

use cinerate_model::{Card, CardID};

use super::stars::StarRow;

/// Tracks which cards have been wired, exactly once each.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    initialized: HashSet<CardID>,
    rows: HashMap<CardID, StarRow>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card exactly once, building its star row.
    ///
    /// Returns `false`, and changes nothing, when the instance is
    /// already known, so repeated initialization cannot produce a second
    /// star row or re-apply transitions.
    pub fn initialize(&mut self, card: &Card) -> bool {
        if !self.initialized.insert(card.id) {
            tracing::debug!(card = %card.id, "card already initialized");
            return false;
        }
        self.rows.insert(card.id, StarRow::with_rating(card.rating));
        true
    }

    pub fn is_initialized(&self, id: CardID) -> bool {
        self.initialized.contains(&id)
    }

    pub fn row(&self, id: CardID) -> Option<&StarRow> {
        self.rows.get(&id)
    }

    pub(crate) fn row_mut(&mut self, id: CardID) -> Option<&mut StarRow> {
        self.rows.get_mut(&id)
    }

    /// Drop the star row of a discarded card.
    ///
    /// The id itself stays known: initialization is monotonic, and card
    /// instance ids are never reused.
    pub(crate) fn retire(&mut self, id: CardID) {
        self.rows.remove(&id);
    }

    /// Number of live star rows.
    pub fn live_rows(&self) -> usize {
        self.rows.len()
    }
}
