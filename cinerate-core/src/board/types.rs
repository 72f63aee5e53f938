//! Board domain state: the rated list and the ratings map.

use std::collections::HashMap;

use cinerate_model::{Card, CardID, MovieID, Rating};

/// The rated list and the movie → rating map derived from it.
///
/// The map is the source of truth for the gate and the collector; it is
/// written on every transition of a rated-list card and never rebuilt by
/// re-scanning rendered state. Transient search results live outside this
/// struct and are therefore invisible to both.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// Cards eligible for counting and submission, in display order.
    pub roster: Vec<Card>,
    /// One entry per positively rated movie.
    pub ratings: HashMap<MovieID, Rating>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card(&self, id: CardID) -> Option<&Card> {
        self.roster.iter().find(|card| card.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: CardID) -> Option<&mut Card> {
        self.roster.iter_mut().find(|card| card.id == id)
    }

    /// Mirror a card's rating into the map.
    ///
    /// Zero removes the entry: the map only ever holds rated movies.
    pub(crate) fn record_rating(&mut self, movie_id: &MovieID, rating: Rating) {
        if rating.is_rated() {
            self.ratings.insert(movie_id.clone(), rating);
        } else {
            self.ratings.remove(movie_id);
        }
    }
}
