//! Search domain state.

use cinerate_model::{Card, CardID};

/// Content of the search result pane.
///
/// The pane holds at most one transient card; every new search replaces
/// the whole pane, so stale results and promotion controls cannot pile
/// up.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPane {
    /// Nothing searched yet, or the previous result was consumed.
    Empty,
    /// A lookup is outstanding.
    Pending { query: String },
    /// Exactly one transient card with its promotion control attached.
    Found { card: Card },
    /// Inline failure shown in place of a result.
    Failed { message: String },
}

/// Manual search state.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Latest generation handed out. Completions carrying anything older
    /// belong to a superseded request and are discarded unrendered.
    generation: u64,
    /// Whether the latest issued lookup is still outstanding.
    pub in_flight: bool,
    pub pane: ResultPane,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            generation: 0,
            in_flight: false,
            pane: ResultPane::Empty,
        }
    }
}

impl SearchState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Hand out the generation for a newly issued request.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True when `generation` identifies the latest issued request.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// The transient card, when the pane shows one.
    pub fn found_card(&self) -> Option<&Card> {
        match &self.pane {
            ResultPane::Found { card } => Some(card),
            _ => None,
        }
    }

    pub(crate) fn found_card_mut(&mut self) -> Option<&mut Card> {
        match &mut self.pane {
            ResultPane::Found { card } => Some(card),
            _ => None,
        }
    }

    /// Empty the pane, discarding any transient card and its promotion
    /// control. Returns the discarded card's id so its row can be
    /// retired.
    pub(crate) fn clear_pane(&mut self) -> Option<CardID> {
        let discarded = self.found_card().map(|card| card.id);
        self.pane = ResultPane::Empty;
        discarded
    }
}
