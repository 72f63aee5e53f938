//! Message and effect plumbing shared by the domains.

use crate::board;
use crate::search;

/// Top-level message routed to a domain update function.
#[derive(Debug, Clone)]
pub enum DomainMessage {
    Board(board::Message),
    Search(search::Message),
}

impl From<board::Message> for DomainMessage {
    fn from(message: board::Message) -> Self {
        DomainMessage::Board(message)
    }
}

impl From<search::Message> for DomainMessage {
    fn from(message: search::Message) -> Self {
        DomainMessage::Search(message)
    }
}

/// Work an update asks the driver to perform.
///
/// Update functions are synchronous; anything that leaves the interaction
/// thread (the lookup request, the final form post) or addresses the user
/// outside the shared message region comes back as an effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue the lookup request for `query`. The completion must re-enter
    /// the engine as a search message carrying the same generation.
    Lookup { query: String, generation: u64 },
    /// Post the collected rating fields.
    Submit { fields: Vec<(String, String)> },
    /// Transient user-facing prompt, distinct from the message region.
    Prompt(String),
}

/// Result of a domain update operation.
#[derive(Debug, Default)]
pub struct UpdateOutcome {
    /// Effects for the driver, in the order they were produced.
    pub effects: Vec<Effect>,
}

impl UpdateOutcome {
    /// An update that changed state but asks nothing of the driver.
    pub fn none() -> Self {
        Self::default()
    }

    /// An update producing a single effect.
    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    /// Append an effect to this outcome.
    pub fn add_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
