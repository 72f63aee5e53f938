//! Cooperative driver tying the engine to its effects.

use std::collections::VecDeque;
use std::fmt;

use cinerate_model::CardParts;

use crate::board;
use crate::config::BoardConfig;
use crate::messages::{DomainMessage, Effect, UpdateOutcome};
use crate::search::{self, MovieLookup};
use crate::state::State;

/// Route a message to its domain's update function.
pub fn update(state: &mut State, message: DomainMessage) -> UpdateOutcome {
    match message {
        DomainMessage::Board(message) => board::update(state, message),
        DomainMessage::Search(message) => search::update(state, message),
    }
}

/// What a dispatched message produced for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    /// Transient prompt to surface to the user.
    Prompted(String),
    /// The gate passed and the payload is ready to post.
    Submitted(Vec<(String, String)>),
}

/// Owns the interaction state and performs lookup effects in place.
///
/// Mutation stays single-threaded: effects come back from an update, are
/// performed one at a time, and a lookup completion re-enters the engine
/// as an ordinary message, where the generation guard decides whether it
/// still applies. A driver that lets lookups overlap relies on the same
/// guard.
pub struct Runtime<L> {
    pub state: State,
    lookup: L,
}

impl<L> fmt::Debug for Runtime<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime").field("state", &self.state).finish()
    }
}

impl<L: MovieLookup> Runtime<L> {
    pub fn new(state: State, lookup: L) -> Self {
        Self { state, lookup }
    }

    /// Mount the pre-rendered cards and wrap the result in a runtime.
    pub fn mount(
        config: BoardConfig,
        seeds: Vec<CardParts>,
        lookup: L,
    ) -> Self {
        Self::new(State::mount(config, seeds), lookup)
    }

    /// Feed one message through the engine, performing any effects it
    /// produces along the way.
    pub async fn dispatch(&mut self, message: DomainMessage) -> Vec<Reaction> {
        let mut reactions = Vec::new();
        let mut effects: VecDeque<Effect> =
            update(&mut self.state, message).effects.into();

        while let Some(effect) = effects.pop_front() {
            match effect {
                Effect::Prompt(text) => {
                    reactions.push(Reaction::Prompted(text));
                }
                Effect::Submit { fields } => {
                    reactions.push(Reaction::Submitted(fields));
                }
                Effect::Lookup { query, generation } => {
                    let completion = match self.lookup.lookup(&query).await {
                        Ok(movie) => search::Message::ResultReceived {
                            generation,
                            movie,
                        },
                        Err(error) => search::Message::LookupFailed {
                            generation,
                            message: error.to_string(),
                        },
                    };
                    let followup = update(
                        &mut self.state,
                        DomainMessage::Search(completion),
                    );
                    effects.extend(followup.effects);
                }
            }
        }

        reactions
    }
}
