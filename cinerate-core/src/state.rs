//! Top-level interaction state.

use cinerate_model::{Card, CardParts};

use crate::board::{BoardState, CardRegistry, gate};
use crate::config::BoardConfig;
use crate::notice::MessageRegion;
use crate::search::SearchState;

/// Everything the engine mutates, owned by one cooperative driver.
///
/// The registry sits beside the domains because it spans both: rated-list
/// cards and the transient search result are wired through the same set
/// of known instances.
#[derive(Debug, Clone)]
pub struct State {
    pub board: BoardState,
    pub search: SearchState,
    pub registry: CardRegistry,
    pub notices: MessageRegion,
    pub config: BoardConfig,
}

impl State {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: BoardState::new(),
            search: SearchState::default(),
            registry: CardRegistry::new(),
            notices: MessageRegion::new(),
            config,
        }
    }

    /// Wire up every pre-rendered card and run the initial gate pass.
    ///
    /// A card with missing or malformed pieces is reported and skipped;
    /// the rest of the page mounts normally.
    pub fn mount(config: BoardConfig, seeds: Vec<CardParts>) -> Self {
        let mut state = Self::new(config);

        for parts in seeds {
            match Card::from_parts(parts) {
                Ok(card) => {
                    if card.is_rated() {
                        state.board.record_rating(&card.movie_id, card.rating);
                    }
                    state.registry.initialize(&card);
                    state.board.roster.push(card);
                }
                Err(error) => {
                    tracing::error!(%error, "skipping malformed card");
                }
            }
        }

        gate::evaluate(&mut state);
        state
    }
}
